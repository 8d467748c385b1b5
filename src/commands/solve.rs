//! Puzzle solving command
//!
//! Runs one strategy on a puzzle and keeps what a report or export needs.

use crate::core::Puzzle;
use crate::dictionary::OrderedDictionary;
use crate::output::formatters::format_duration;
use crate::solver::{Solution, Strategy};

/// Result of solving a puzzle with one strategy
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub strategy: &'static str,
    pub puzzle: Puzzle,
    pub solution: Solution,
}

/// Solve a puzzle with the given strategy
///
/// # Examples
/// ```
/// use spellbee_solver::commands::solve_puzzle;
/// use spellbee_solver::core::Puzzle;
/// use spellbee_solver::solver::DictionaryMatcher;
/// use spellbee_solver::wordlists::{WORDS, dictionary_from_slice};
///
/// let dictionary = dictionary_from_slice(WORDS);
/// let puzzle = Puzzle::new("dorsety".parse().unwrap(), 'y', 4, 5).unwrap();
///
/// let report = solve_puzzle(&DictionaryMatcher, &puzzle, &dictionary);
/// assert_eq!(report.strategy, "dictionary");
/// assert!(report.solution.words().contains(&"dyers"));
/// ```
pub fn solve_puzzle<S: Strategy>(
    strategy: &S,
    puzzle: &Puzzle,
    dictionary: &OrderedDictionary,
) -> SolveReport {
    log::info!(
        "Solving {puzzle} with {} strategy over {} words",
        strategy.name(),
        dictionary.len()
    );

    let solution = strategy.solve(puzzle, dictionary);

    log::info!(
        "{} found {} words (generation {}, search {})",
        strategy.name(),
        solution.count(),
        format_duration(solution.timings.generation, 2),
        format_duration(solution.timings.search, 2)
    );

    SolveReport {
        strategy: strategy.name(),
        puzzle: puzzle.clone(),
        solution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{DictionaryMatcher, Enumerator};
    use crate::wordlists::{WORDS, dictionary_from_slice};

    fn puzzle(letters: &str, required: char, min: usize, max: usize) -> Puzzle {
        Puzzle::new(letters.parse().unwrap(), required, min, max).unwrap()
    }

    #[test]
    fn report_records_strategy_and_puzzle() {
        let dictionary = dictionary_from_slice(WORDS);
        let p = puzzle("aptiylc", 'c', 4, 6);

        let report = solve_puzzle(&Enumerator::default(), &p, &dictionary);
        assert_eq!(report.strategy, "tree");
        assert_eq!(report.puzzle, p);
        assert!(report.solution.traversal.is_some());
    }

    #[test]
    fn solving_twice_is_idempotent() {
        let dictionary = dictionary_from_slice(WORDS);
        let p = puzzle("dorsety", 'y', 4, 7);

        let first = solve_puzzle(&DictionaryMatcher, &p, &dictionary);
        let second = solve_puzzle(&DictionaryMatcher, &p, &dictionary);
        assert_eq!(first.solution.records, second.solution.records);

        let first = solve_puzzle(&Enumerator::default(), &p, &dictionary);
        let second = solve_puzzle(&Enumerator::default(), &p, &dictionary);
        assert_eq!(first.solution.records, second.solution.records);
        assert_eq!(first.solution.traversal, second.solution.traversal);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let dictionary = dictionary_from_slice(WORDS);
        let report = solve_puzzle(&DictionaryMatcher, &puzzle("xqz", 'q', 4, 5), &dictionary);
        assert_eq!(report.solution.count(), 0);
    }
}
