//! Single-word decoding

use super::DecodeConfig;
use crate::core::{Group, Number, split_groups};
use crate::error::{DecodeError, Result};
use crate::reducer::{Core, LogObserver, reduce_with};
use log::debug;

/// One group of a word and what it decoded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDecoding {
    pub group: Group,
    /// `None` only when a placeholder was substituted
    pub core: Option<Core>,
    pub letter: char,
}

/// A decoded word with the intermediate data the debug output reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDecoding {
    pub word: String,
    pub numbers: Vec<Number>,
    pub groups: Vec<GroupDecoding>,
    pub decoded: String,
}

/// Decode one word
///
/// # Errors
/// Returns a `DecodeError::Word` wrapping `InvalidCharacter`,
/// `RemainderGroup` or `NoValidCore`, subject to the leniency options in
/// `config`.
///
/// # Examples
/// ```
/// use numeric_core::decoder::{DecodeConfig, decode_word};
///
/// let result = decode_word("handtoad", &DecodeConfig::new()).unwrap();
/// assert_eq!(result.decoded, "BT");
/// ```
pub fn decode_word(word: &str, config: &DecodeConfig) -> Result<WordDecoding> {
    decode_groups(word, config).map_err(|e| e.in_word(word))
}

fn decode_groups(word: &str, config: &DecodeConfig) -> Result<WordDecoding> {
    let numbers = word
        .chars()
        .filter(|c| !config.skip_non_letters || c.is_ascii_alphabetic())
        .map(Number::from_letter)
        .collect::<Result<Vec<_>>>()?;

    let groups = split_groups(&numbers, config.remainder)?
        .into_iter()
        .map(|group| {
            let core = reduce_with(&group, config.search, &mut LogObserver);
            let letter = match (core, config.placeholder) {
                (Some(core), _) => core.letter(),
                (None, Some(placeholder)) => placeholder,
                (None, None) => return Err(DecodeError::NoValidCore { group }),
            };
            debug!("{} {group} -> {letter}", group.letters());
            Ok(GroupDecoding {
                group,
                core,
                letter,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let decoded = groups.iter().map(|g| g.letter).collect();

    Ok(WordDecoding {
        word: word.to_string(),
        numbers,
        groups,
        decoded,
    })
}
