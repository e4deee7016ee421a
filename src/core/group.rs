//! Four-number groups
//!
//! A word's numbers are sliced into consecutive, non-overlapping groups of
//! four. What happens to a trailing partial group is decided by
//! [`RemainderPolicy`].

use super::Number;
use crate::error::{DecodeError, Result};
use std::fmt;

/// Numbers per group
pub const GROUP_SIZE: usize = 4;

/// Four consecutive letter numbers from one word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group([Number; GROUP_SIZE]);

impl Group {
    #[must_use]
    pub const fn new(numbers: [Number; GROUP_SIZE]) -> Self {
        Self(numbers)
    }

    /// Build a group from raw values
    ///
    /// # Errors
    /// Returns `DecodeError::OutOfRange` if any value is not in 1-26.
    ///
    /// # Examples
    /// ```
    /// use numeric_core::core::Group;
    ///
    /// let hand = Group::from_values([8, 1, 14, 4]).unwrap();
    /// assert_eq!(hand.letters(), "HAND");
    /// assert!(Group::from_values([0, 1, 2, 3]).is_err());
    /// ```
    pub fn from_values(values: [i64; GROUP_SIZE]) -> Result<Self> {
        let [a, b, c, d] = values;
        Ok(Self([
            Number::new(a)?,
            Number::new(b)?,
            Number::new(c)?,
            Number::new(d)?,
        ]))
    }

    /// Build a group from four letters
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidCharacter` for anything outside A-Z.
    pub fn from_letters(letters: &str) -> Result<Self> {
        let numbers = letters
            .chars()
            .map(Number::from_letter)
            .collect::<Result<Vec<_>>>()?;
        let numbers: [Number; GROUP_SIZE] =
            numbers
                .try_into()
                .map_err(|rest: Vec<Number>| DecodeError::RemainderGroup {
                    remainder: rest.len() % GROUP_SIZE,
                })?;
        Ok(Self(numbers))
    }

    #[inline]
    #[must_use]
    pub const fn numbers(&self) -> &[Number; GROUP_SIZE] {
        &self.0
    }

    /// The letters this group was built from
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|n| n.letter()).collect()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

/// What to do with letters left over after the last full group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    /// Fail the word with `DecodeError::RemainderGroup`
    #[default]
    Error,
    /// Silently discard the trailing letters
    Drop,
}

/// Slice numbers into groups of four
///
/// # Errors
/// Returns `DecodeError::RemainderGroup` when the count is not a multiple of
/// four and the policy is [`RemainderPolicy::Error`].
pub fn split_groups(numbers: &[Number], policy: RemainderPolicy) -> Result<Vec<Group>> {
    let chunks = numbers.chunks_exact(GROUP_SIZE);
    let remainder = chunks.remainder().len();

    if remainder > 0 && policy == RemainderPolicy::Error {
        return Err(DecodeError::RemainderGroup { remainder });
    }

    Ok(chunks
        .map(|chunk| {
            let mut group = [Number::MIN; GROUP_SIZE];
            group.copy_from_slice(chunk);
            Group(group)
        })
        .collect())
}
