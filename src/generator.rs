//! Password generator.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::{CharClass, build_pool};
use crate::error::PolicyError;
use crate::evaluator::score;
use crate::types::{GenerationPolicy, Password, StrengthReport};

/// Generates one password satisfying `policy`.
///
/// One character is drawn from every selected class, the rest from the
/// union of the selected classes, and the result is shuffled. When
/// `policy.length` is smaller than the number of selected classes the
/// shuffled guaranteed characters are truncated, so some requested classes
/// are missing from the output.
///
/// # Errors
/// `PolicyError::NoCharacterClass` if no class is selected,
/// `PolicyError::InvalidLength` if `policy.length` is zero.
pub fn generate<R>(policy: &GenerationPolicy, rng: &mut R) -> Result<Password, PolicyError>
where
    R: Rng + ?Sized,
{
    let classes = policy.selected_classes();
    if classes.is_empty() {
        return Err(PolicyError::NoCharacterClass);
    }
    if policy.length == 0 {
        return Err(PolicyError::InvalidLength);
    }

    let pool = build_pool(&classes);
    let mut password_chars = Vec::with_capacity(policy.length.max(classes.len()));

    // Guarantee at least one character from each selected class
    for class in &classes {
        password_chars.push(pick(class.charset(), rng));
    }

    // Fill the rest from the combined pool
    for _ in 0..policy.length.saturating_sub(classes.len()) {
        password_chars.push(pick(&pool, rng));
    }

    password_chars.shuffle(rng);
    password_chars.truncate(policy.length);

    let password: String = password_chars.into_iter().collect();
    Ok(SecretString::new(password.into()))
}

/// Generates a password and scores it straight away.
pub fn generate_and_score<R>(
    policy: &GenerationPolicy,
    rng: &mut R,
) -> Result<(Password, StrengthReport), PolicyError>
where
    R: Rng + ?Sized,
{
    let password = generate(policy, rng)?;
    let report = score(&password);
    Ok((password, report))
}

fn pick<R: Rng + ?Sized>(set: &[u8], rng: &mut R) -> char {
    set[rng.gen_range(0..set.len())] as char
}

/// Classes present in `password`, in canonical order.
pub fn classes_in(password: &str) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.matches(c)))
        .collect()
}
