//! Property-based tests for the numeric core.
//!
//! Uses proptest to check the mapping, reduction and decoding invariants for
//! arbitrary letters and groups.

use numeric_core::core::{Group, Number, SearchSpace, to_letter, to_number};
use numeric_core::decoder::{DecodeConfig, decode_line, decode_word};
use numeric_core::reducer::{TraceRecorder, reduce, reduce_with};
use proptest::prelude::*;

fn letter() -> impl Strategy<Value = char> {
    (b'A'..=b'Z').prop_map(char::from)
}

fn group() -> impl Strategy<Value = Group> {
    [1i64..=26, 1i64..=26, 1i64..=26, 1i64..=26]
        .prop_map(|values| Group::from_values(values).unwrap())
}

fn space() -> impl Strategy<Value = SearchSpace> {
    prop_oneof![
        Just(SearchSpace::Permutations),
        Just(SearchSpace::WithRepetition),
    ]
}

// =============================================================================
// Letter Mapping
// =============================================================================

proptest! {
    /// to_letter(to_number(L)) = L
    #[test]
    fn prop_letter_round_trip(l in letter()) {
        let number = to_number(l).unwrap();
        prop_assert_eq!(to_letter(i64::from(number.value())).unwrap(), l);
    }

    /// to_number(to_letter(n)) = n
    #[test]
    fn prop_number_round_trip(n in 1i64..=26) {
        let letter = to_letter(n).unwrap();
        prop_assert_eq!(i64::from(to_number(letter).unwrap().value()), n);
    }

    /// Lowercase maps like uppercase
    #[test]
    fn prop_case_insensitive(l in letter()) {
        prop_assert_eq!(
            to_number(l.to_ascii_lowercase()).unwrap(),
            to_number(l).unwrap()
        );
    }

    /// Numbers outside 1-26 never map to a letter
    #[test]
    fn prop_out_of_range_rejected(n in prop_oneof![i64::MIN..=0, 27i64..=i64::MAX]) {
        prop_assert!(to_letter(n).is_err());
    }
}

// =============================================================================
// Group Reduction
// =============================================================================

proptest! {
    /// The core is the minimum over every valid evaluation
    #[test]
    fn prop_core_is_minimum(g in group(), s in space()) {
        let mut recorder = TraceRecorder::new();
        let core = reduce_with(&g, s, &mut recorder);
        let minimum = recorder.evaluations().iter().filter_map(|e| e.value()).min();

        prop_assert_eq!(core.map(|c| c.value()), minimum);
    }

    /// The reported assignment really produces the core value
    #[test]
    fn prop_core_assignment_reproduces_value(g in group(), s in space()) {
        if let Some(core) = reduce(&g, s) {
            let eval = numeric_core::reducer::evaluate(&g, core.assignment());
            prop_assert_eq!(eval.value(), Some(core.value()));
        }
    }

    /// Every evaluated assignment is reported, in search order
    #[test]
    fn prop_search_is_exhaustive(g in group(), s in space()) {
        let mut recorder = TraceRecorder::new();
        reduce_with(&g, s, &mut recorder);
        let tried: Vec<_> = recorder.evaluations().iter().map(|e| e.assignment).collect();
        prop_assert_eq!(tried, s.assignments());
    }

    /// Allowing repetition can only add candidates, so the core never grows
    #[test]
    fn prop_repetition_never_increases_core(g in group()) {
        if let Some(core) = reduce(&g, SearchSpace::Permutations) {
            let wider = reduce(&g, SearchSpace::WithRepetition);
            prop_assert!(wider.is_some_and(|w| w.value() <= core.value()));
        }
    }

    /// Valid results are always letters
    #[test]
    fn prop_core_in_letter_range(g in group(), s in space()) {
        if let Some(core) = reduce(&g, s) {
            prop_assert!(core.value() >= Number::MIN && core.value() <= Number::MAX);
            prop_assert!(core.letter().is_ascii_uppercase());
        }
    }
}

// =============================================================================
// Word and Line Decoding
// =============================================================================

proptest! {
    /// A word's letters are its groups' letters, in order
    #[test]
    fn prop_word_is_concatenation_of_groups(groups in prop::collection::vec(group(), 1..5)) {
        let word: String = groups.iter().map(Group::letters).collect();
        let config = DecodeConfig {
            placeholder: Some('?'),
            ..DecodeConfig::new()
        };

        let expected: String = groups
            .iter()
            .map(|g| reduce(g, config.search).map_or('?', |c| c.letter()))
            .collect();

        prop_assert_eq!(decode_word(&word, &config).unwrap().decoded, expected);
    }

    /// Decoding is deterministic
    #[test]
    fn prop_decoding_is_repeatable(groups in prop::collection::vec(group(), 1..8)) {
        let line: Vec<String> = groups.iter().map(Group::letters).collect();
        let line = line.join(" ");
        let config = DecodeConfig::lenient();

        let first = decode_line(&line, &config).unwrap();
        let second = decode_line(&line, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
