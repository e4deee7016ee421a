//! File decoding command
//!
//! Decodes a whole input file and renders it in simple or debug form.

use crate::decoder::{DecodeConfig, LineDecoding, decode_file_with_progress};
use crate::error::Result;
use crate::output::{render_debug, render_simple};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Output verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One decoded line per input line
    #[default]
    Simple,
    /// Per-word and per-group working, then the decoded line
    Debug,
}

/// Configuration for decoding a file
pub struct DecodeRequest {
    pub input: PathBuf,
    pub config: DecodeConfig,
    pub mode: OutputMode,
    pub show_progress: bool,
}

impl DecodeRequest {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            config: DecodeConfig::default(),
            mode: OutputMode::default(),
            show_progress: false,
        }
    }
}

/// Result of decoding a file
pub struct DecodeResult {
    pub lines: Vec<LineDecoding>,
    pub mode: OutputMode,
}

impl DecodeResult {
    /// The full output text for this result's mode
    #[must_use]
    pub fn render(&self) -> String {
        match self.mode {
            OutputMode::Simple => render_simple(&self.lines),
            OutputMode::Debug => render_debug(&self.lines),
        }
    }
}

/// Decode the requested file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - Any line fails to decode under `request.config`
///
/// # Panics
///
/// Panics if the built-in progress bar template is malformed.
pub fn run_decode(request: &DecodeRequest) -> Result<DecodeResult> {
    let progress = if request.show_progress {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lines ({percent}%)")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let lines = decode_file_with_progress(&request.input, &request.config, &progress)?;

    Ok(DecodeResult {
        lines,
        mode: request.mode,
    })
}
