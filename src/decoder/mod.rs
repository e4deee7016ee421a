//! Word, line and file decoding
//!
//! Builds on the group reducer: words are split into groups, each group's
//! numeric core becomes one letter, and a line's words are concatenated.

mod batch;
mod line;
mod word;

pub use batch::{decode_file, decode_text, decode_text_with_progress};
pub(crate) use batch::decode_file_with_progress;
pub use line::{LineDecoding, decode_line};
pub use word::{GroupDecoding, WordDecoding, decode_word};

use crate::core::{RemainderPolicy, SearchSpace};

/// Placeholder used by [`DecodeConfig::lenient`]
pub const DEFAULT_PLACEHOLDER: char = '?';

/// How words are decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    /// Operator assignments tried per group
    pub search: SearchSpace,
    /// Handling of letters left over after the last group of four
    pub remainder: RemainderPolicy,
    /// Drop characters outside A-Z instead of failing
    pub skip_non_letters: bool,
    /// Emitted for a group with no numeric core instead of failing
    pub placeholder: Option<char>,
}

impl DecodeConfig {
    /// Strict decoding: every error aborts
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgiving decoding: skip stray characters, drop trailing letters and
    /// write `?` for groups without a core
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            search: SearchSpace::default(),
            remainder: RemainderPolicy::Drop,
            skip_non_letters: true,
            placeholder: Some(DEFAULT_PLACEHOLDER),
        }
    }

    #[must_use]
    pub const fn with_search(mut self, search: SearchSpace) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub const fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }
}
