//! Plain data records shared by the generator and the scorer.

use std::fmt;

use secrecy::SecretString;

use crate::charset::CharClass;

/// A generated password. Redacted in `Debug` output.
pub type Password = SecretString;

/// Character-class policy and target length for one generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 12,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_special: true,
        }
    }
}

impl GenerationPolicy {
    /// All four classes at the given length.
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.include_upper,
            CharClass::Lower => self.include_lower,
            CharClass::Digit => self.include_digits,
            CharClass::Special => self.include_special,
        }
    }

    /// Selected classes in canonical order.
    pub fn selected_classes(&self) -> Vec<CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(|&class| self.includes(class))
            .collect()
    }
}

/// Five-level classification of a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    /// Only produced for the empty password.
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Maps a rubric score to its classification.
    ///
    /// Never returns `VeryWeak`: that level is reserved for empty input,
    /// which the evaluator handles before the rubric runs.
    pub fn from_score(score: u8) -> Self {
        match score {
            6.. => Strength::VeryStrong,
            4..=5 => Strength::Strong,
            3 => Strength::Moderate,
            _ => Strength::Weak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Result of scoring one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Rubric total, `0..=6`.
    pub score: u8,
    pub classification: Strength,
    /// One message per evaluated criterion: length, upper, lower, digit, special.
    pub feedback: Vec<String>,
}

impl StrengthReport {
    pub const MAX_SCORE: u8 = 6;

    pub(crate) fn empty() -> Self {
        Self {
            score: 0,
            classification: Strength::VeryWeak,
            feedback: Vec::new(),
        }
    }
}
