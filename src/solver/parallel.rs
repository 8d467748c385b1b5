//! Partitioned tree enumeration
//!
//! Fans the enumerator out over a worker pool, one task per first letter.
//! Workers share only read-only data (puzzle, dictionary, prefix index) and
//! return their own partial results, merged once all of them finish.

use super::enumerator::{EnumeratorOptions, Partial, Traversal, assemble};
use super::solution::Solution;
use super::strategy::Strategy;
use crate::core::Puzzle;
use crate::dictionary::OrderedDictionary;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::time::Instant;

/// Tree enumerator running one subtree per first letter in parallel
///
/// The pool holds min(letter count, available threads) workers. Records come
/// back grouped by first letter, each group in generation order. Search time
/// in integrated mode is summed across workers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelEnumerator {
    options: EnumeratorOptions,
}

impl ParallelEnumerator {
    #[must_use]
    pub const fn new(options: EnumeratorOptions) -> Self {
        Self { options }
    }
}

impl Strategy for ParallelEnumerator {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn solve(&self, puzzle: &Puzzle, dictionary: &OrderedDictionary) -> Solution {
        let start = Instant::now();
        let prefixes = self.options.prefix_index(puzzle, dictionary);
        let letters = puzzle.letters().as_bytes();

        let run_partition = |&first: &u8| -> Partial {
            let mut traversal = Traversal::new(puzzle, dictionary, self.options, prefixes.as_ref());
            traversal.visit(first, false);
            traversal.finish()
        };

        let workers = letters.len().min(rayon::current_num_threads()).max(1);
        let partials: Vec<Partial> = match ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => {
                log::debug!("Enumerating {} partitions on {workers} workers", letters.len());
                pool.install(|| letters.par_iter().map(run_partition).collect())
            }
            Err(err) => {
                log::warn!("Cannot build worker pool ({err}), enumerating on the current thread");
                letters.iter().map(run_partition).collect()
            }
        };

        assemble(partials, dictionary, self.options.lookup, start.elapsed())
    }
}
