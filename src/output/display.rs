//! Display functions for command results

use super::formatters::format_numbers;
use crate::commands::{AnalysisResult, DecodeResult, GroupAnalysis};
use crate::reducer::{Evaluation, Outcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print a decode result to stdout in its configured mode
///
/// # Errors
///
/// Returns an error if stdout cannot be written (e.g. a closed pipe).
pub fn print_decode_result(result: &DecodeResult) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(result.render().as_bytes())?;
    stdout.flush()
}

/// Print the full search for every group of an analyzed word
pub fn print_analysis_result(result: &AnalysisResult, placeholder: char) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NUMERIC CORE ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\nNumbers: {}", format_numbers(&result.numbers));

    for (i, group) in result.groups.iter().enumerate() {
        print_group_analysis(i + 1, group);
    }

    if result.remainder > 0 {
        println!(
            "\n{}",
            format!(
                "⚠️  {} trailing letter(s) do not fill a group and were ignored",
                result.remainder
            )
            .yellow()
        );
    }

    println!(
        "\nDecoded: {}",
        result.decoded(placeholder).green().bold()
    );
}

fn print_group_analysis(index: usize, group: &GroupAnalysis) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Group {index}: {} {}",
        group.group.letters().bright_yellow().bold(),
        format_numbers(group.group.numbers())
    );
    println!("{}", "─".repeat(60).cyan());

    for evaluation in &group.evaluations {
        print_evaluation(evaluation);
    }

    let values: Vec<String> = group
        .candidate_values()
        .iter()
        .map(ToString::to_string)
        .collect();
    if values.is_empty() {
        println!("\n  Valid results: {}", "none".red());
    } else {
        println!("\n  Valid results: {}", values.join(", "));
    }

    match group.core {
        Some(core) => println!(
            "  Numeric core:  {} via {} → {}",
            core.value().to_string().bright_yellow().bold(),
            core.assignment(),
            core.letter().to_string().green().bold()
        ),
        None => println!("  Numeric core:  {}", "none".red().bold()),
    }
}

fn print_evaluation(evaluation: &Evaluation) {
    let steps: Vec<String> = evaluation
        .steps
        .iter()
        .map(|&step| step.map_or_else(|| "—".to_string(), |v| v.to_string()))
        .collect();

    let outcome = match evaluation.outcome {
        Outcome::Valid(_) => evaluation.outcome.to_string().green(),
        Outcome::DivisionByZero { .. } => evaluation.outcome.to_string().red(),
        Outcome::Fractional(_) | Outcome::OutOfRange(_) => {
            evaluation.outcome.to_string().bright_black()
        }
    };

    println!(
        "  {}  {:>8} {:>8} {:>8}   {outcome}",
        evaluation.assignment, steps[0], steps[1], steps[2]
    );
}
