//! Benchmark command
//!
//! Cross-validates two strategies over randomly drawn puzzles and totals
//! their running times.

use super::compare::compare;
use crate::core::{LetterSet, Puzzle, PuzzleError};
use crate::dictionary::OrderedDictionary;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of puzzles to draw
    pub count: usize,
    /// Distinct letters per puzzle
    pub letter_count: usize,
    pub min_length: usize,
    pub max_length: usize,
    /// Fixed RNG seed for reproducible puzzles
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 20,
            letter_count: 7,
            min_length: 4,
            max_length: 7,
            seed: None,
            show_progress: true,
        }
    }
}

impl BenchmarkConfig {
    /// Check the length bounds every drawn puzzle will use
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError` if the bounds are inverted or start at zero.
    pub const fn validate(&self) -> Result<(), PuzzleError> {
        Puzzle::check_lengths(self.min_length, self.max_length)
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub left_name: &'static str,
    pub right_name: &'static str,
    pub puzzles: usize,
    pub consistent: usize,
    /// Labels of the puzzles the strategies disagreed on
    pub mismatches: Vec<String>,
    pub left_time: Duration,
    pub right_time: Duration,
    pub words_found: usize,
    pub duration: Duration,
}

/// Dictionary words spelling exactly `letter_count` distinct letters
///
/// These seed random puzzles, guaranteeing at least one answer.
#[must_use]
pub fn puzzle_seeds(dictionary: &OrderedDictionary, letter_count: usize) -> Vec<&str> {
    dictionary
        .iter()
        .filter(|word| {
            LetterSet::new(word.chars()).is_ok_and(|letters| letters.len() == letter_count)
        })
        .collect()
}

/// Draw a puzzle from a random seed word, with a random required letter
///
/// Returns `Ok(None)` when there are no seeds.
///
/// # Errors
///
/// Returns `PuzzleError` if the length bounds are invalid.
pub fn random_puzzle<R: Rng>(
    rng: &mut R,
    seeds: &[&str],
    min_length: usize,
    max_length: usize,
) -> Result<Option<Puzzle>, PuzzleError> {
    let Some(seed) = seeds.choose(rng) else {
        return Ok(None);
    };

    let letters = LetterSet::new(seed.chars())?;
    let required = letters
        .as_bytes()
        .choose(rng)
        .map_or('a', |&b| char::from(b));

    Puzzle::new(letters, required, min_length, max_length).map(Some)
}

/// Run both strategies over `config.count` random puzzles
///
/// # Errors
///
/// Returns `PuzzleError` if the configured length bounds are invalid.
pub fn run_benchmark<L: Strategy, R: Strategy>(
    left: &L,
    right: &R,
    dictionary: &OrderedDictionary,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, PuzzleError> {
    config.validate()?;

    let start = Instant::now();
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let seeds = puzzle_seeds(dictionary, config.letter_count);
    log::info!(
        "Drawing {} puzzles from {} seed words with {} distinct letters",
        config.count,
        seeds.len(),
        config.letter_count
    );

    let pb = if config.show_progress {
        ProgressBar::new(config.count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut result = BenchmarkResult {
        left_name: left.name(),
        right_name: right.name(),
        puzzles: 0,
        consistent: 0,
        mismatches: Vec::new(),
        left_time: Duration::ZERO,
        right_time: Duration::ZERO,
        words_found: 0,
        duration: Duration::ZERO,
    };

    for _ in 0..config.count {
        let Some(puzzle) = random_puzzle(&mut rng, &seeds, config.min_length, config.max_length)?
        else {
            log::warn!("No seed words with {} distinct letters", config.letter_count);
            break;
        };

        let comparison = compare(left, right, &puzzle, dictionary);
        result.puzzles += 1;
        result.left_time += comparison.left.solution.timings.total();
        result.right_time += comparison.right.solution.timings.total();
        result.words_found += comparison.right.solution.count();

        if comparison.is_consistent() {
            result.consistent += 1;
        } else {
            result.mismatches.push(puzzle.to_string());
        }

        pb.set_message(format!("{puzzle}: {} words", comparison.right.solution.count()));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    result.duration = start.elapsed();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{DictionaryMatcher, Enumerator, EnumeratorOptions, PrefixPrune};
    use crate::wordlists::{WORDS, dictionary_from_slice};

    fn quiet_config(count: usize, seed: u64) -> BenchmarkConfig {
        BenchmarkConfig {
            count,
            max_length: 6,
            seed: Some(seed),
            show_progress: false,
            ..BenchmarkConfig::default()
        }
    }

    fn fast_enumerator() -> Enumerator {
        Enumerator::new(EnumeratorOptions {
            prefix_prune: PrefixPrune::EveryDepth,
            ..EnumeratorOptions::default()
        })
    }

    #[test]
    fn seeds_have_exact_letter_count() {
        let dictionary = dictionary_from_slice(WORDS);
        let seeds = puzzle_seeds(&dictionary, 7);

        assert!(seeds.contains(&"destroy"));
        assert!(seeds.contains(&"typical"));
        assert!(!seeds.contains(&"capital")); // six distinct letters
    }

    #[test]
    fn random_puzzle_uses_seed_letters() {
        let mut rng = StdRng::seed_from_u64(7);
        let seeds = ["destroy"];
        let puzzle = random_puzzle(&mut rng, &seeds, 4, 7).unwrap().unwrap();

        assert_eq!(puzzle.letters().as_bytes(), b"deorsty");
        assert!(puzzle.letters().contains(puzzle.required()));
        assert!(puzzle.accepts("destroy"));
    }

    #[test]
    fn random_puzzle_without_seeds() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_puzzle(&mut rng, &[], 4, 7), Ok(None));
    }

    #[test]
    fn random_puzzle_rejects_bad_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = random_puzzle(&mut rng, &["destroy"], 5, 4);
        assert_eq!(result, Err(PuzzleError::InvalidLengthBounds { min: 5, max: 4 }));
    }

    #[test]
    fn benchmark_strategies_agree() {
        let dictionary = dictionary_from_slice(WORDS);
        let config = BenchmarkConfig {
            max_length: 9,
            ..quiet_config(8, 42)
        };
        let result =
            run_benchmark(&fast_enumerator(), &DictionaryMatcher, &dictionary, &config).unwrap();

        assert_eq!(result.puzzles, 8);
        assert_eq!(result.consistent, 8);
        assert!(result.mismatches.is_empty());
        assert!(result.words_found >= 8); // every seed word answers its own puzzle
        assert_eq!(result.left_name, "tree");
        assert_eq!(result.right_name, "dictionary");
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let dictionary = dictionary_from_slice(WORDS);
        let config = quiet_config(5, 1234);

        let first = run_benchmark(&DictionaryMatcher, &DictionaryMatcher, &dictionary, &config)
            .unwrap();
        let second = run_benchmark(&DictionaryMatcher, &DictionaryMatcher, &dictionary, &config)
            .unwrap();
        assert_eq!(first.words_found, second.words_found);
    }

    #[test]
    fn bad_bounds_rejected_without_seeds() {
        let dictionary = dictionary_from_slice(&["dog", "cat"]);
        let config = BenchmarkConfig {
            min_length: 6,
            max_length: 5,
            ..quiet_config(3, 1)
        };

        let result = run_benchmark(&fast_enumerator(), &DictionaryMatcher, &dictionary, &config);
        assert_eq!(
            result.map(|r| r.puzzles),
            Err(PuzzleError::InvalidLengthBounds { min: 6, max: 5 })
        );
    }

    #[test]
    fn benchmark_without_seeds_runs_no_puzzles() {
        let dictionary = dictionary_from_slice(&["dog", "cat"]);
        let result =
            run_benchmark(&fast_enumerator(), &DictionaryMatcher, &dictionary, &quiet_config(3, 1))
                .unwrap();
        assert_eq!(result.puzzles, 0);
        assert_eq!(result.words_found, 0);
    }
}
