//! Dictionary range matching
//!
//! Skips generation entirely: locate one boundary per allowed letter, then
//! test every entry inside those ranges. Cost grows with the number of entries
//! that start with an allowed letter, not with the letter-space size.

use super::enumerator::contains_run;
use super::solution::{Solution, Timings};
use super::strategy::Strategy;
use crate::core::{FoundWord, Puzzle};
use crate::dictionary::{Boundary, OrderedDictionary};
use std::time::Instant;

/// Boundary-scan strategy
///
/// Inspects real dictionary entries directly, so it never misses a word the
/// enumerator could only find by regenerating it.
///
/// # Examples
/// ```
/// use spellbee_solver::core::Puzzle;
/// use spellbee_solver::solver::{DictionaryMatcher, Strategy};
/// use spellbee_solver::wordlists::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(&["cacti", "city", "clay", "pita"]);
/// let puzzle = Puzzle::new("aptiylc".parse().unwrap(), 'c', 4, 4).unwrap();
///
/// let solution = DictionaryMatcher.solve(&puzzle, &dictionary);
/// assert_eq!(solution.words(), vec!["city", "clay"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryMatcher;

impl Strategy for DictionaryMatcher {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn solve(&self, puzzle: &Puzzle, dictionary: &OrderedDictionary) -> Solution {
        let start = Instant::now();
        let boundaries = dictionary.boundaries(puzzle.letters());
        let generation = start.elapsed();

        let start = Instant::now();
        let records = scan(puzzle, dictionary, &boundaries);
        let search = start.elapsed();

        log::debug!(
            "Dictionary scan accepted {} of {} entries in range",
            records.len(),
            boundaries.iter().map(Boundary::len).sum::<usize>()
        );

        Solution {
            records,
            timings: Timings { generation, search },
            traversal: None,
        }
    }
}

/// Test every entry inside the boundaries against the puzzle
///
/// Entries with three identical letters in a row are skipped, the same words
/// the enumerator never generates.
fn scan(puzzle: &Puzzle, dictionary: &OrderedDictionary, boundaries: &[Boundary]) -> Vec<FoundWord> {
    boundaries
        .iter()
        .flat_map(Boundary::indices)
        .filter_map(|index| {
            dictionary
                .get(index)
                .filter(|word| puzzle.accepts(word) && !contains_run(word.as_bytes()))
                .map(|word| FoundWord::new(word, index))
        })
        .collect()
}
