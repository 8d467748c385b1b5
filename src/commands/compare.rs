//! Strategy comparison ("vs" mode)
//!
//! Runs two strategies on the same puzzle and dictionary snapshot and checks
//! that they agree on the found words.

use super::solve::{SolveReport, solve_puzzle};
use crate::core::{FoundWord, Puzzle};
use crate::dictionary::OrderedDictionary;
use crate::solver::Strategy;
use std::collections::BTreeSet;

/// Both reports of a comparison run
#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: SolveReport,
    pub right: SolveReport,
}

impl Comparison {
    /// Records the left strategy found and the right one did not
    #[must_use]
    pub fn only_in_left(&self) -> Vec<&FoundWord> {
        difference(&self.left, &self.right)
    }

    /// Records the right strategy found and the left one did not
    #[must_use]
    pub fn only_in_right(&self) -> Vec<&FoundWord> {
        difference(&self.right, &self.left)
    }

    /// Whether both strategies found the same (word, index) set
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        record_set(&self.left) == record_set(&self.right)
    }
}

/// Run both strategies on identical inputs
///
/// # Examples
/// ```
/// use spellbee_solver::commands::compare;
/// use spellbee_solver::core::Puzzle;
/// use spellbee_solver::solver::{DictionaryMatcher, Enumerator};
/// use spellbee_solver::wordlists::{WORDS, dictionary_from_slice};
///
/// let dictionary = dictionary_from_slice(WORDS);
/// let puzzle = Puzzle::new("aptiylc".parse().unwrap(), 'c', 4, 6).unwrap();
///
/// let comparison = compare(&Enumerator::default(), &DictionaryMatcher, &puzzle, &dictionary);
/// assert!(comparison.is_consistent());
/// ```
pub fn compare<L: Strategy, R: Strategy>(
    left: &L,
    right: &R,
    puzzle: &Puzzle,
    dictionary: &OrderedDictionary,
) -> Comparison {
    let comparison = Comparison {
        left: solve_puzzle(left, puzzle, dictionary),
        right: solve_puzzle(right, puzzle, dictionary),
    };

    if !comparison.is_consistent() {
        log::warn!(
            "{} and {} disagree on {puzzle}: {} vs {} words",
            comparison.left.strategy,
            comparison.right.strategy,
            comparison.left.solution.count(),
            comparison.right.solution.count()
        );
    }

    comparison
}

fn record_set(report: &SolveReport) -> BTreeSet<(&str, usize)> {
    report
        .solution
        .iter()
        .map(|r| (r.word.as_str(), r.index))
        .collect()
}

fn difference<'a>(from: &'a SolveReport, other: &SolveReport) -> Vec<&'a FoundWord> {
    let other = record_set(other);
    from.solution
        .iter()
        .filter(|r| !other.contains(&(r.word.as_str(), r.index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{
        Checkpoints, DictionaryMatcher, Enumerator, EnumeratorOptions, LookupMode,
        ParallelEnumerator, PrefixPrune,
    };
    use crate::wordlists::{WORDS, dictionary_from_slice};

    fn puzzle(letters: &str, required: char, min: usize, max: usize) -> Puzzle {
        Puzzle::new(letters.parse().unwrap(), required, min, max).unwrap()
    }

    #[test]
    fn enumerator_and_matcher_agree() {
        let dictionary = dictionary_from_slice(WORDS);
        let cases = [
            puzzle("dorsety", 'y', 4, 7),
            puzzle("dorsety", 'd', 3, 5),
            puzzle("aptiylc", 'c', 4, 6),
            puzzle("aptiylc", 'a', 1, 4),
            puzzle("abdeksz", 'k', 4, 6),
        ];

        for p in &cases {
            for lookup in [LookupMode::Integrated, LookupMode::Batch] {
                let options = EnumeratorOptions {
                    lookup,
                    prefix_prune: PrefixPrune::EveryDepth,
                    checkpoints: Checkpoints::EveryDepth,
                };
                let comparison = compare(&Enumerator::new(options), &DictionaryMatcher, p, &dictionary);
                assert!(comparison.is_consistent(), "{p} {lookup:?}");
                assert!(comparison.only_in_left().is_empty());
                assert!(comparison.only_in_right().is_empty());
            }
        }
    }

    #[test]
    fn parallel_and_matcher_agree() {
        let dictionary = dictionary_from_slice(WORDS);
        let p = puzzle("dorsety", 'e', 4, 6);
        let comparison = compare(&ParallelEnumerator::default(), &DictionaryMatcher, &p, &dictionary);
        assert!(comparison.is_consistent());
        assert_eq!(comparison.left.strategy, "parallel");
        assert_eq!(comparison.right.strategy, "dictionary");
    }

    #[test]
    fn leaves_only_reports_missing_words() {
        let dictionary = dictionary_from_slice(WORDS);
        let p = puzzle("dorsety", 'y', 4, 6);
        let leaves = Enumerator::new(EnumeratorOptions {
            checkpoints: Checkpoints::LeavesOnly,
            ..EnumeratorOptions::default()
        });

        let comparison = compare(&leaves, &DictionaryMatcher, &p, &dictionary);
        assert!(!comparison.is_consistent());
        assert!(comparison.only_in_left().is_empty());

        let missing = comparison.only_in_right();
        assert!(missing.iter().any(|r| r.word == "dyers"));
        assert!(missing.iter().all(|r| r.length < 6));
    }

    #[test]
    fn triple_run_entries_skipped_by_both() {
        let dictionary = dictionary_from_slice(&["brrr", "burr"]);
        let p = puzzle("bru", 'r', 4, 4);

        let comparison = compare(&Enumerator::default(), &DictionaryMatcher, &p, &dictionary);
        assert!(comparison.is_consistent());
        assert_eq!(comparison.right.solution.words(), vec!["burr"]);
    }
}
