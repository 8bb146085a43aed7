//! Password strength scorer - runs the rubric sections and classifies the total.

use secrecy::{ExposeSecret, SecretString};

use crate::sections::{
    Section, digit_section, length_section, lowercase_section, special_section, uppercase_section,
};
use crate::types::{Strength, StrengthReport};

/// Scores a password against the strength rubric.
///
/// The empty password is a degenerate case: it scores 0 and is classified
/// `VeryWeak` without running any section. Any other input gets one
/// feedback line per section, in rubric order.
///
/// # Returns
/// A `StrengthReport` with the score (0-6), its classification and the
/// per-criterion feedback. Scoring never fails.
pub fn score(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthReport::empty();
    }

    // Orchestrator: feedback order follows this table
    let sections: [(&str, Section); 5] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_section),
    ];

    let mut total = 0u8;
    let mut feedback = Vec::with_capacity(sections.len());
    for (_section_name, section_fn) in sections {
        let outcome = section_fn(pwd);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = _section_name, points = outcome.points, "section scored");

        total += outcome.points;
        feedback.push(outcome.feedback);
    }

    let score = total.min(StrengthReport::MAX_SCORE);
    StrengthReport {
        score,
        classification: Strength::from_score(score),
        feedback,
    }
}
