//! Numeric Core Decoder
//!
//! Decodes words into letters: every group of four letters (A=1 … Z=26) is
//! reduced with subtraction, multiplication and division applied left to
//! right, and the smallest whole result in 1-26 becomes the decoded letter.
//!
//! # Quick Start
//!
//! ```rust
//! use numeric_core::decoder::{DecodeConfig, decode_line};
//!
//! // HAND: 8 - 1 = 7, 7 / 14 = 1/2, 1/2 * 4 = 2 -> B
//! let line = decode_line("HAND TOAD", &DecodeConfig::new()).unwrap();
//! assert_eq!(line.decoded, "BT");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Group reduction
pub mod reducer;

// Word, line and file decoding
pub mod decoder;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{DecodeError, Result};
