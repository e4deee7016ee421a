//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_decode_result};
pub use formatters::{format_numbers, render_debug, render_simple};
