//! Error types for decoding
//!
//! Word and line failures wrap the underlying cause so the caller can report
//! where in the input the problem was found.

use crate::core::Group;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a word, line or file from being decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A character outside A-Z where a letter was expected.
    #[error("invalid character {0:?}: only letters A-Z can be decoded")]
    InvalidCharacter(char),

    /// A number that does not name a letter.
    #[error("number {0} is outside the letter range 1-26")]
    OutOfRange(i64),

    /// No operator assignment reduces the group to a whole number in 1-26.
    #[error("group {group} has no valid numeric core")]
    NoValidCore { group: Group },

    /// The word leaves letters over after splitting into groups of four.
    #[error("{remainder} trailing letter(s) do not form a group of 4")]
    RemainderGroup { remainder: usize },

    /// The input file could not be read.
    #[error("cannot read {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A failure inside a specific word.
    #[error("failed to decode word {word:?}")]
    Word {
        word: String,
        #[source]
        source: Box<DecodeError>,
    },

    /// A failure on a specific (1-based) input line.
    #[error("failed to decode line {line}")]
    Line {
        line: usize,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn in_word(self, word: &str) -> Self {
        Self::Word {
            word: word.to_string(),
            source: Box::new(self),
        }
    }

    pub(crate) fn on_line(self, line: usize) -> Self {
        Self::Line {
            line,
            source: Box::new(self),
        }
    }

    /// The innermost error, with word and line context stripped
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Word { source, .. } | Self::Line { source, .. } => source.root(),
            other => other,
        }
    }

    /// The 1-based line the error was raised on, if known
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, DecodeError>;
