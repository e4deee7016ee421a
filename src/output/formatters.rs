//! Text rendering for decode results

use crate::core::Number;
use crate::decoder::{GroupDecoding, LineDecoding, WordDecoding};
use colored::Colorize;
use std::fmt::Write;

/// Format numbers as `[8, 1, 14, 4]`
#[must_use]
pub fn format_numbers(numbers: &[Number]) -> String {
    let inner: Vec<String> = numbers.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// One output line per input line, decoded letters only
#[must_use]
pub fn render_simple(lines: &[LineDecoding]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.decoded);
        out.push('\n');
    }
    out
}

/// Per-word working followed by a summary for each line
#[must_use]
pub fn render_debug(lines: &[LineDecoding]) -> String {
    let mut out = String::new();
    for line in lines {
        for word in &line.words {
            write_word(&mut out, word);
        }
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{} {}\n",
            "Decoded line:".bright_cyan().bold(),
            line.decoded.green().bold()
        );
    }
    out
}

fn write_word(out: &mut String, word: &WordDecoding) {
    let _ = writeln!(
        out,
        "Processing word: {}",
        word.word.bright_yellow().bold()
    );
    let _ = writeln!(
        out,
        " Letter-to-number conversion: {}",
        format_numbers(&word.numbers)
    );
    for group in &word.groups {
        write_group(out, group);
    }
}

fn write_group(out: &mut String, decoding: &GroupDecoding) {
    let _ = writeln!(
        out,
        "  Group of 4: {}",
        format_numbers(decoding.group.numbers())
    );
    match decoding.core {
        Some(core) => {
            let _ = writeln!(
                out,
                "    → Best ops: {} → Result: {}",
                core.assignment(),
                core.value()
            );
            let _ = writeln!(
                out,
                "    → Numeric Core: {} → Letter: {}",
                core.value(),
                decoding.letter.to_string().green()
            );
        }
        None => {
            let _ = writeln!(out, "    → {}", "No valid core found".red());
            let _ = writeln!(
                out,
                "    → Numeric Core: None → Letter: {}",
                decoding.letter
            );
        }
    }
}
