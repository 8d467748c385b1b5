//! Solving strategies
//!
//! Defines the Strategy trait and runtime selection between implementations.

use super::{DictionaryMatcher, Enumerator, EnumeratorOptions, ParallelEnumerator, Solution};
use crate::core::Puzzle;
use crate::dictionary::OrderedDictionary;

/// A way of finding every dictionary word that satisfies a puzzle
///
/// All implementations must return set-equal records for the same puzzle and
/// dictionary snapshot; only ordering and timings may differ.
pub trait Strategy {
    /// Short name used in reports and file names
    fn name(&self) -> &'static str;

    /// Find all accepted words
    fn solve(&self, puzzle: &Puzzle, dictionary: &OrderedDictionary) -> Solution;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Single-threaded tree enumeration
    Tree(Enumerator),
    /// Tree enumeration partitioned by first letter
    Parallel(ParallelEnumerator),
    /// Range scan over per-letter dictionary boundaries (default)
    Dictionary(DictionaryMatcher),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Tree(s) => s.name(),
            Self::Parallel(s) => s.name(),
            Self::Dictionary(s) => s.name(),
        }
    }

    fn solve(&self, puzzle: &Puzzle, dictionary: &OrderedDictionary) -> Solution {
        match self {
            Self::Tree(s) => s.solve(puzzle, dictionary),
            Self::Parallel(s) => s.solve(puzzle, dictionary),
            Self::Dictionary(s) => s.solve(puzzle, dictionary),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "tree", "parallel", "dictionary".
    /// Defaults to dictionary if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, options: EnumeratorOptions) -> Self {
        match name {
            "tree" => Self::Tree(Enumerator::new(options)),
            "parallel" => Self::Parallel(ParallelEnumerator::new(options)),
            _ => Self::Dictionary(DictionaryMatcher),
        }
    }

    /// Whether this strategy enumerates candidate sequences
    #[must_use]
    pub const fn is_enumerator(&self) -> bool {
        matches!(self, Self::Tree(_) | Self::Parallel(_))
    }
}
