//! Letter ↔ number mapping
//!
//! A=1 … Z=26. Input is case-insensitive; letters always come back uppercase.

use crate::error::{DecodeError, Result};
use std::fmt;

/// Number of letters in the alphabet, and the largest valid [`Number`]
pub const ALPHABET_LEN: u8 = 26;

/// A letter's position in the alphabet (1-26)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(u8);

impl Number {
    /// Smallest valid number (A)
    pub const MIN: Self = Self(1);
    /// Largest valid number (Z)
    pub const MAX: Self = Self(ALPHABET_LEN);

    /// Create a number, rejecting anything outside 1-26
    ///
    /// # Errors
    /// Returns `DecodeError::OutOfRange` if `value` is not in 1-26.
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (1..=ALPHABET_LEN).contains(v))
            .map(Self)
            .ok_or(DecodeError::OutOfRange(value))
    }

    /// Map a letter to its number
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidCharacter` for anything but ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use numeric_core::core::Number;
    ///
    /// assert_eq!(Number::from_letter('H').unwrap().value(), 8);
    /// assert_eq!(Number::from_letter('h').unwrap().value(), 8);
    /// assert!(Number::from_letter('!').is_err());
    /// ```
    pub fn from_letter(letter: char) -> Result<Self> {
        if letter.is_ascii_alphabetic() {
            let upper = letter.to_ascii_uppercase() as u8;
            Ok(Self(upper - b'A' + 1))
        } else {
            Err(DecodeError::InvalidCharacter(letter))
        }
    }

    /// Raw value (1-26)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The uppercase letter this number stands for
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0 - 1) as char
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convert a letter to its number
///
/// # Errors
/// Returns `DecodeError::InvalidCharacter` if `letter` is not in A-Z (either case).
pub fn to_number(letter: char) -> Result<Number> {
    Number::from_letter(letter)
}

/// Convert a number (1-26) back to its uppercase letter
///
/// # Errors
/// Returns `DecodeError::OutOfRange` if `number` is not in 1-26.
pub fn to_letter(number: i64) -> Result<char> {
    Number::new(number).map(Number::letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_alphabet_ends() {
        assert_eq!(to_number('A').unwrap(), Number::MIN);
        assert_eq!(to_number('Z').unwrap(), Number::MAX);
        assert_eq!(to_letter(1).unwrap(), 'A');
        assert_eq!(to_letter(26).unwrap(), 'Z');
    }

    #[test]
    fn lowercase_is_normalized() {
        assert_eq!(to_number('d').unwrap().value(), 4);
        assert_eq!(to_number('d').unwrap().letter(), 'D');
    }

    #[test]
    fn rejects_non_letters() {
        for c in ['0', ' ', '-', '?', 'é', 'ß'] {
            assert!(
                matches!(to_number(c), Err(DecodeError::InvalidCharacter(found)) if found == c),
                "{c:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        for n in [0, 27, -1, 256, i64::MAX] {
            assert!(matches!(to_letter(n), Err(DecodeError::OutOfRange(v)) if v == n));
        }
    }

    #[test]
    fn round_trips_every_letter() {
        for letter in 'A'..='Z' {
            let number = to_number(letter).unwrap();
            assert_eq!(number.letter(), letter);
            assert_eq!(to_letter(i64::from(number.value())).unwrap(), letter);
        }
    }

    #[test]
    fn display_is_plain_value() {
        assert_eq!(Number::new(14).unwrap().to_string(), "14");
    }
}
