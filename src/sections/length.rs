//! Length section - awards points by length tier.

use super::SectionOutcome;

const GOOD_LENGTH: usize = 8;
const EXCELLENT_LENGTH: usize = 12;

/// Scores password length in characters.
///
/// # Returns
/// - 2 points at 12 characters or more
/// - 1 point from 8 to 11 characters
/// - 0 points below 8 characters
pub fn length_section(password: &str) -> SectionOutcome {
    let len = password.chars().count();
    if len >= EXCELLENT_LENGTH {
        SectionOutcome::new(2, format!("Excellent length ({}+ characters).", EXCELLENT_LENGTH))
    } else if len >= GOOD_LENGTH {
        SectionOutcome::new(
            1,
            format!("Good length ({}-{} characters).", GOOD_LENGTH, EXCELLENT_LENGTH - 1),
        )
    } else {
        SectionOutcome::new(
            0,
            format!("Weak: Password should be at least {} characters long.", GOOD_LENGTH),
        )
    }
}
