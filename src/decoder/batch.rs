//! Whole-text and whole-file decoding
//!
//! Lines are independent, so they are decoded in parallel. Results come back
//! in input order and nothing is returned unless every line succeeds.

use super::{DecodeConfig, LineDecoding, decode_line};
use crate::error::{DecodeError, Result};
use indicatif::ProgressBar;
use log::info;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Decode every line of `text`
///
/// # Errors
/// Returns the error from the lowest-numbered failing line, wrapped in
/// `DecodeError::Line`.
pub fn decode_text(text: &str, config: &DecodeConfig) -> Result<Vec<LineDecoding>> {
    decode_text_with_progress(text, config, &ProgressBar::hidden())
}

/// [`decode_text`], advancing `progress` once per line
///
/// # Errors
/// Same as [`decode_text`].
pub fn decode_text_with_progress(
    text: &str,
    config: &DecodeConfig,
    progress: &ProgressBar,
) -> Result<Vec<LineDecoding>> {
    let lines: Vec<&str> = text.lines().collect();
    progress.set_length(lines.len() as u64);

    // Gather every outcome first so the reported error does not depend on
    // thread scheduling.
    let results: Vec<Result<LineDecoding>> = lines
        .par_iter()
        .enumerate()
        .map(|(idx, line)| {
            let result = decode_line(line, config).map_err(|e| e.on_line(idx + 1));
            progress.inc(1);
            result
        })
        .collect();

    progress.finish_and_clear();
    results.into_iter().collect()
}

/// Read `path` and decode every line
///
/// # Errors
/// Returns `DecodeError::FileAccess` if the file cannot be read, otherwise
/// the same errors as [`decode_text`].
pub fn decode_file(path: impl AsRef<Path>, config: &DecodeConfig) -> Result<Vec<LineDecoding>> {
    decode_file_with_progress(path, config, &ProgressBar::hidden())
}

pub(crate) fn decode_file_with_progress(
    path: impl AsRef<Path>,
    config: &DecodeConfig,
    progress: &ProgressBar,
) -> Result<Vec<LineDecoding>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| DecodeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Decoding {} ({} bytes)", path.display(), text.len());
    let lines = decode_text_with_progress(&text, config, progress)?;
    info!("Decoded {} line(s)", lines.len());
    Ok(lines)
}
