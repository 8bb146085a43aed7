//! Character classes used by the generator and the scorer.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four recognized character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    /// Canonical order: guarantee-inclusion and feedback both follow it.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// ASCII characters the generator draws from for this class.
    pub fn charset(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    /// Scoring membership test.
    ///
    /// `Special` is anything outside `A-Za-z0-9`, so non-ASCII characters
    /// count as special even though the generator never emits them.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Lower => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Special => !c.is_ascii_alphanumeric(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase letters",
            CharClass::Lower => "lowercase letters",
            CharClass::Digit => "digits",
            CharClass::Special => "special characters",
        }
    }
}

/// Union of the given classes' character sets, in the order given.
pub fn build_pool(classes: &[CharClass]) -> Vec<u8> {
    let mut pool = Vec::new();
    for class in classes {
        pool.extend_from_slice(class.charset());
    }
    pool
}
