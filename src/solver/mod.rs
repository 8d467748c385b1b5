//! Spelling Bee solving algorithms
//!
//! Two competing strategies share one contract (puzzle + dictionary -> records):
//! tree enumeration with pruning, and a range scan over the sorted dictionary.

mod enumerator;
mod matcher;
mod parallel;
mod prefix;
mod solution;
pub mod strategy;

pub use enumerator::{Checkpoints, Enumerator, EnumeratorOptions, LookupMode, PrefixPrune};
pub use matcher::DictionaryMatcher;
pub use parallel::ParallelEnumerator;
pub use prefix::PrefixIndex;
pub use solution::{Solution, Timings, TraversalStats};
pub use strategy::{Strategy, StrategyType};
