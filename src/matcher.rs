//! Candidate matching.
//!
//! Every arrangement of the present letters over the unknown slots becomes one
//! `SlotPattern`; a word is a candidate when it fits any of them.

use crate::constraints::{ConstraintError, ConstraintSet, WORD_LENGTH};
use crate::debug_log;
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternSlot {
    Exact(char),
    /// Any letter that is not excluded
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotPattern([PatternSlot; WORD_LENGTH]);

impl SlotPattern {
    #[must_use]
    pub fn slots(&self) -> &[PatternSlot; WORD_LENGTH] {
        &self.0
    }

    /// `word` must already be upper case.
    #[must_use]
    pub fn matches(&self, word: &str, excluded: &[char]) -> bool {
        let letters: Vec<char> = word.chars().collect();
        letters.len() == WORD_LENGTH
            && self.0.iter().zip(&letters).all(|(slot, c)| match slot {
                PatternSlot::Exact(expected) => c == expected,
                PatternSlot::Open => !excluded.contains(c),
            })
    }
}

/// Build one pattern per distinct arrangement of the present letters.
///
/// # Errors
/// Returns `ConstraintError::TooManyPresent` if the present letters do not fit
/// into the unknown slots.
pub fn build_patterns(constraints: &ConstraintSet) -> Result<Vec<SlotPattern>, ConstraintError> {
    constraints.validate()?;

    let mut base = [PatternSlot::Open; WORD_LENGTH];
    for (slot, known) in base.iter_mut().zip(constraints.known()) {
        if let Some(c) = known {
            *slot = PatternSlot::Exact(*c);
        }
    }

    let unknown = constraints.unknown_slots();
    if unknown.is_empty() {
        return Ok(vec![SlotPattern(base)]);
    }

    let padded: Vec<PatternSlot> = constraints
        .present()
        .iter()
        .map(|&c| PatternSlot::Exact(c))
        .chain(std::iter::repeat(PatternSlot::Open))
        .take(unknown.len())
        .collect();

    let patterns: Vec<SlotPattern> = padded
        .into_iter()
        .permutations(unknown.len())
        .unique()
        .map(|arrangement| {
            let mut slots = base;
            for (&index, slot) in unknown.iter().zip(arrangement) {
                slots[index] = slot;
            }
            SlotPattern(slots)
        })
        .collect();

    debug_log!(
        "build_patterns() - {} patterns for {} with present {:?}",
        patterns.len(),
        constraints.pattern(),
        constraints.present()
    );
    Ok(patterns)
}

/// Filter `words` down to those consistent with `constraints`, keeping the
/// word-list order.
///
/// # Errors
/// Returns `ConstraintError::TooManyPresent` if the present letters do not fit
/// into the unknown slots.
pub fn find_candidates(
    constraints: &ConstraintSet,
    words: &[String],
) -> Result<Vec<String>, ConstraintError> {
    let patterns = build_patterns(constraints)?;
    let excluded = constraints.excluded();

    let candidates: Vec<String> = words
        .iter()
        .map(|word| word.to_uppercase())
        .filter(|word| patterns.iter().any(|p| p.matches(word, excluded)))
        .collect();

    debug_log!(
        "find_candidates() - {} of {} words match",
        candidates.len(),
        words.len()
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    fn sample() -> Vec<String> {
        words(&["CRANE", "CRATE", "TRACE", "GRAPE"])
    }

    #[test]
    fn test_known_slots_with_exclusion() {
        let mut constraints = ConstraintSet::new();
        constraints.set_pattern("_RA_E").unwrap();
        constraints.set_excluded("N");
        let result = find_candidates(&constraints, &sample()).unwrap();
        // TRACE and GRAPE also carry R, A and E in those slots
        assert_eq!(result, words(&["CRATE", "TRACE", "GRAPE"]));

        constraints.set_known(0, Some('C')).unwrap();
        let result = find_candidates(&constraints, &sample()).unwrap();
        assert_eq!(result, words(&["CRATE"]));
    }

    #[test]
    fn test_present_letters_anywhere() {
        let mut constraints = ConstraintSet::new();
        constraints.set_present("TE");
        let result = find_candidates(&constraints, &sample()).unwrap();
        assert_eq!(result, vec!["CRATE".to_string(), "TRACE".to_string()]);
    }

    #[test]
    fn test_no_constraints_returns_full_list() {
        let constraints = ConstraintSet::new();
        assert_eq!(find_candidates(&constraints, &sample()).unwrap(), sample());
    }

    #[test]
    fn test_exact_literal_match() {
        let mut constraints = ConstraintSet::new();
        constraints.set_pattern("trace").unwrap();
        assert_eq!(
            find_candidates(&constraints, &sample()).unwrap(),
            vec!["TRACE".to_string()]
        );

        constraints.set_pattern("SLATE").unwrap();
        assert!(find_candidates(&constraints, &sample()).unwrap().is_empty());
    }

    #[test]
    fn test_lowercase_word_list_is_normalised() {
        let mut constraints = ConstraintSet::new();
        constraints.set_present("G");
        let result = find_candidates(&constraints, &words(&["grape", "crane"])).unwrap();
        assert_eq!(result, vec!["GRAPE".to_string()]);
    }

    #[test]
    fn test_known_slot_not_restricted_by_exclusion() {
        let mut constraints = ConstraintSet::new();
        constraints.set_excluded("E");
        constraints.set_known(4, Some('E')).unwrap();
        assert!(constraints.excluded().is_empty());

        let mut pinned = [PatternSlot::Open; WORD_LENGTH];
        pinned[4] = PatternSlot::Exact('E');
        assert!(SlotPattern(pinned).matches("CRANE", &['E']));
        assert!(!SlotPattern(pinned).matches("CREPT", &['E']));
    }

    #[test]
    fn test_excluded_only_yields_single_pattern() {
        let mut constraints = ConstraintSet::new();
        constraints.set_pattern("CR___").unwrap();
        constraints.set_excluded("N");
        let patterns = build_patterns(&constraints).unwrap();
        assert_eq!(patterns.len(), 1);
    }

    #[test]
    fn test_all_slots_known_yields_single_pattern() {
        let mut constraints = ConstraintSet::new();
        constraints.set_pattern("CRANE").unwrap();
        let patterns = build_patterns(&constraints).unwrap();
        assert_eq!(patterns.len(), 1);
        assert_eq!(
            patterns[0].slots(),
            &[
                PatternSlot::Exact('C'),
                PatternSlot::Exact('R'),
                PatternSlot::Exact('A'),
                PatternSlot::Exact('N'),
                PatternSlot::Exact('E'),
            ]
        );
    }

    #[test]
    fn test_fillers_do_not_multiply_patterns() {
        let mut constraints = ConstraintSet::new();
        constraints.set_present("T");
        // One letter over five open slots: five distinct arrangements
        assert_eq!(build_patterns(&constraints).unwrap().len(), 5);

        constraints.set_present("TE");
        assert_eq!(build_patterns(&constraints).unwrap().len(), 20);

        constraints.set_present("ABCDE");
        assert_eq!(build_patterns(&constraints).unwrap().len(), 120);
    }

    #[test]
    fn test_too_many_present_is_rejected() {
        let mut constraints = ConstraintSet::new();
        constraints.set_pattern("CRAN_").unwrap();
        constraints.set_present("TE");
        assert_eq!(
            find_candidates(&constraints, &sample()),
            Err(ConstraintError::TooManyPresent {
                present: 2,
                unknown: 1
            })
        );
    }

    #[test]
    fn test_excluded_letters_absent_from_open_positions() {
        let list = words(&["CRANE", "CRATE", "TRACE", "GRAPE", "SLATE", "PLACE"]);
        let mut constraints = ConstraintSet::new();
        constraints.set_known(4, Some('E')).unwrap();
        constraints.set_excluded("CN");
        let result = find_candidates(&constraints, &list).unwrap();
        assert_eq!(result, words(&["GRAPE", "SLATE"]));
        for word in &result {
            assert!(!word[..4].contains(['C', 'N']));
        }
    }

    #[test]
    fn test_monotonic_narrowing() {
        let list = words(&["CRANE", "CRATE", "TRACE", "GRAPE", "SLATE", "PLACE", "STARE"]);
        let mut constraints = ConstraintSet::new();
        let mut previous = find_candidates(&constraints, &list).unwrap();

        let steps: [fn(&mut ConstraintSet); 3] = [
            |c| c.set_present("A"),
            |c| c.set_excluded("N"),
            |c| c.set_known(4, Some('E')).unwrap(),
        ];
        for step in steps {
            step(&mut constraints);
            let next = find_candidates(&constraints, &list).unwrap();
            assert!(next.iter().all(|w| previous.contains(w)));
            previous = next;
        }
    }

    #[test]
    fn test_deterministic() {
        let mut constraints = ConstraintSet::new();
        constraints.set_present("RE");
        let first = find_candidates(&constraints, &sample()).unwrap();
        let second = find_candidates(&constraints, &sample()).unwrap();
        assert_eq!(first, second);
    }
}
