//! Word analysis command
//!
//! Shows the complete search for every group of a word: each assignment's
//! intermediate values and outcome, which values were valid, and the core.

use crate::core::{Assignment, GROUP_SIZE, Group, Number, RemainderPolicy, split_groups};
use crate::decoder::DecodeConfig;
use crate::error::Result;
use crate::reducer::{Core, Evaluation, TraceRecorder, reduce_with};
use rustc_hash::FxHashMap;

/// The full search for one group
pub struct GroupAnalysis {
    pub group: Group,
    pub evaluations: Vec<Evaluation>,
    /// Every valid value and the assignments that reached it
    pub candidates: FxHashMap<Number, Vec<Assignment>>,
    pub core: Option<Core>,
}

impl GroupAnalysis {
    /// Valid values in ascending order
    #[must_use]
    pub fn candidate_values(&self) -> Vec<Number> {
        let mut values: Vec<Number> = self.candidates.keys().copied().collect();
        values.sort_unstable();
        values
    }
}

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub numbers: Vec<Number>,
    pub groups: Vec<GroupAnalysis>,
    /// Trailing letters that did not fill a group
    pub remainder: usize,
}

impl AnalysisResult {
    /// Letters decoded so far, with `placeholder` for groups without a core
    #[must_use]
    pub fn decoded(&self, placeholder: char) -> String {
        self.groups
            .iter()
            .map(|g| g.core.map_or(placeholder, |c| c.letter()))
            .collect()
    }
}

/// Analyze every group of a word
///
/// Trailing letters and groups without a core are reported rather than
/// treated as errors.
///
/// # Errors
///
/// Returns an error if the word contains characters outside A-Z and
/// `config.skip_non_letters` is off.
pub fn analyze_word(word: &str, config: &DecodeConfig) -> Result<AnalysisResult> {
    let numbers = word
        .chars()
        .filter(|c| !config.skip_non_letters || c.is_ascii_alphabetic())
        .map(Number::from_letter)
        .collect::<Result<Vec<_>>>()
        .map_err(|e| e.in_word(word))?;

    let groups = split_groups(&numbers, RemainderPolicy::Drop)?
        .into_iter()
        .map(|group| analyze_group(group, config))
        .collect();

    Ok(AnalysisResult {
        word: word.to_string(),
        remainder: numbers.len() % GROUP_SIZE,
        numbers,
        groups,
    })
}

fn analyze_group(group: Group, config: &DecodeConfig) -> GroupAnalysis {
    let mut recorder = TraceRecorder::new();
    let core = reduce_with(&group, config.search, &mut recorder);
    let evaluations = recorder.into_evaluations();

    let mut candidates: FxHashMap<Number, Vec<Assignment>> = FxHashMap::default();
    for evaluation in &evaluations {
        if let Some(value) = evaluation.value() {
            candidates
                .entry(value)
                .or_default()
                .push(evaluation.assignment);
        }
    }

    GroupAnalysis {
        group,
        evaluations,
        candidates,
        core,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchSpace;
    use crate::error::DecodeError;

    #[test]
    fn analyze_hand() {
        let result = analyze_word("HAND", &DecodeConfig::new()).unwrap();
        assert_eq!(result.groups.len(), 1);
        assert_eq!(result.remainder, 0);

        let group = &result.groups[0];
        assert_eq!(group.evaluations.len(), 6);
        assert_eq!(
            group.candidate_values().iter().map(|n| n.value()).collect::<Vec<_>>(),
            [2]
        );
        assert_eq!(result.decoded('?'), "B");
    }

    #[test]
    fn candidates_list_every_valid_value() {
        let config = DecodeConfig::new().with_search(SearchSpace::WithRepetition);
        let result = analyze_word("TOAD", &config).unwrap();
        let group = &result.groups[0];

        assert_eq!(group.evaluations.len(), 27);
        assert_eq!(
            group.candidate_values().iter().map(|n| n.value()).collect::<Vec<_>>(),
            [1, 16, 20]
        );
        assert_eq!(group.candidates[&Number::MIN].len(), 3);
        assert_eq!(group.core.unwrap().value(), Number::MIN);
    }

    #[test]
    fn core_is_smallest_candidate() {
        for word in ["HAND", "TOAD", "CODE", "BAAA", "WORD"] {
            let result = analyze_word(word, &DecodeConfig::new()).unwrap();
            let group = &result.groups[0];
            assert_eq!(
                group.core.map(|c| c.value()),
                group.candidate_values().first().copied(),
                "{word}"
            );
        }
    }

    #[test]
    fn reports_remainder_and_missing_core() {
        let result = analyze_word("AAAAHANDTO", &DecodeConfig::new()).unwrap();
        assert_eq!(result.groups.len(), 2);
        assert_eq!(result.remainder, 2);
        assert!(result.groups[0].core.is_none());
        assert!(result.groups[0].candidates.is_empty());
        assert_eq!(result.decoded('?'), "?B");
    }

    #[test]
    fn invalid_characters_still_fail() {
        let err = analyze_word("HAN9", &DecodeConfig::new()).err().unwrap();
        assert!(matches!(err.root(), DecodeError::InvalidCharacter('9')));

        let lenient = analyze_word("HAN9D", &DecodeConfig::lenient()).unwrap();
        assert_eq!(lenient.decoded('?'), "B");
    }
}
