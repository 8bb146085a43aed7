//! Character variety sections - one point per character class present.

use super::SectionOutcome;
use crate::charset::CharClass;

fn class_section(password: &str, class: CharClass, example: &str) -> SectionOutcome {
    if password.chars().any(|c| class.matches(c)) {
        SectionOutcome::new(1, format!("Contains {}.", class.name()))
    } else {
        SectionOutcome::new(
            0,
            format!("Suggestion: Add {}{} for more strength.", class.name(), example),
        )
    }
}

/// Awards a point for any `A`-`Z`.
pub fn uppercase_section(password: &str) -> SectionOutcome {
    class_section(password, CharClass::Upper, "")
}

/// Awards a point for any `a`-`z`.
pub fn lowercase_section(password: &str) -> SectionOutcome {
    class_section(password, CharClass::Lower, "")
}

/// Awards a point for any `0`-`9`.
pub fn digit_section(password: &str) -> SectionOutcome {
    class_section(password, CharClass::Digit, "")
}

/// Awards a point for any character outside `A-Za-z0-9`.
pub fn special_section(password: &str) -> SectionOutcome {
    class_section(password, CharClass::Special, " (e.g., !@#$)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = uppercase_section("lowercase123!");
        assert_eq!(result.points, 0);
        assert_eq!(
            result.feedback,
            "Suggestion: Add uppercase letters for more strength."
        );
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = lowercase_section("UPPERCASE123!");
        assert_eq!(result.points, 0);
        assert!(result.feedback.contains("lowercase"));
    }

    #[test]
    fn test_variety_section_missing_digits() {
        let result = digit_section("NoNumbers!");
        assert_eq!(result.points, 0);
        assert!(result.feedback.contains("digits"));
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = special_section("NoSpecial123");
        assert_eq!(
            result,
            SectionOutcome::new(
                0,
                "Suggestion: Add special characters (e.g., !@#$) for more strength."
            )
        );
    }

    #[test]
    fn test_variety_section_all_categories() {
        let pwd = "HasAll123!@#";
        assert_eq!(uppercase_section(pwd), SectionOutcome::new(1, "Contains uppercase letters."));
        assert_eq!(lowercase_section(pwd), SectionOutcome::new(1, "Contains lowercase letters."));
        assert_eq!(digit_section(pwd), SectionOutcome::new(1, "Contains digits."));
        assert_eq!(special_section(pwd), SectionOutcome::new(1, "Contains special characters."));
    }

    #[test]
    fn test_variety_section_non_ascii_letters() {
        // accented capitals are not A-Z, so they only count as special
        assert_eq!(uppercase_section("ÉCOLE").points, 1);
        assert_eq!(uppercase_section("É").points, 0);
        assert_eq!(special_section("É").points, 1);
    }
}
