//! Core domain types for numeric-core decoding
//!
//! Letters and their numbers, exact fractions, operators and four-number
//! groups. Everything here is a plain value type with no I/O.

mod fraction;
mod group;
mod letter;
mod operator;

pub use fraction::Fraction;
pub use group::{GROUP_SIZE, Group, RemainderPolicy, split_groups};
pub use letter::{ALPHABET_LEN, Number, to_letter, to_number};
pub use operator::{Assignment, Operator, SearchSpace};
