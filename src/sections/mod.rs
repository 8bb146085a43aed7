//! Strength rubric sections
//!
//! Each section scores one criterion of the rubric and explains the result.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Points awarded by one section plus its advisory message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: u8,
    pub feedback: String,
}

impl SectionOutcome {
    pub fn new(points: u8, feedback: impl Into<String>) -> Self {
        Self {
            points,
            feedback: feedback.into(),
        }
    }
}

/// Signature shared by every rubric section.
pub type Section = fn(&str) -> SectionOutcome;
