//! Line decoding

use super::{DecodeConfig, WordDecoding, decode_word};
use crate::error::Result;

/// All words of one input line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineDecoding {
    pub words: Vec<WordDecoding>,
    /// Decoded letters of every word, with no separator
    pub decoded: String,
}

/// Decode every whitespace-separated word of a line
///
/// A blank line decodes to an empty string.
///
/// # Errors
/// Returns the first word's `DecodeError` if any word fails.
///
/// # Examples
/// ```
/// use numeric_core::decoder::{DecodeConfig, decode_line};
///
/// let line = decode_line("HAND TOAD", &DecodeConfig::new()).unwrap();
/// assert_eq!(line.decoded, "BT");
/// ```
pub fn decode_line(line: &str, config: &DecodeConfig) -> Result<LineDecoding> {
    let words = line
        .split_whitespace()
        .map(|word| decode_word(word, config))
        .collect::<Result<Vec<_>>>()?;

    let decoded = words.iter().map(|w| w.decoded.as_str()).collect();

    Ok(LineDecoding { words, decoded })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn concatenates_words_without_separator() {
        let line = decode_line("HAND TOAD", &DecodeConfig::new()).unwrap();
        assert_eq!(line.decoded, "BT");
        assert_eq!(line.words.len(), 2);
        assert_eq!(line.words[0].word, "HAND");
        assert_eq!(line.words[1].word, "TOAD");
    }

    #[test]
    fn any_whitespace_separates_words() {
        let line = decode_line("  HAND\tTOAD   HAND\r", &DecodeConfig::new()).unwrap();
        assert_eq!(line.decoded, "BTB");
    }

    #[test]
    fn blank_line_is_empty() {
        for text in ["", "   ", "\t"] {
            let line = decode_line(text, &DecodeConfig::new()).unwrap();
            assert!(line.words.is_empty());
            assert_eq!(line.decoded, "");
        }
    }

    #[test]
    fn failing_word_fails_line() {
        let err = decode_line("HAND T0AD", &DecodeConfig::new()).unwrap_err();
        assert!(matches!(&err, DecodeError::Word { word, .. } if word == "T0AD"));
    }
}
