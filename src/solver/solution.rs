//! Solving results
//!
//! What a strategy hands back: found records, phase timings and, for the
//! enumerators, traversal statistics.

use crate::core::FoundWord;
use std::ops::AddAssign;
use std::time::Duration;

/// Elapsed time per solving phase
///
/// `generation` covers building the candidate space (candidate sequences, or
/// boundaries for the matcher); `search` covers dictionary lookups or scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    pub generation: Duration,
    pub search: Duration,
}

impl Timings {
    #[must_use]
    pub fn total(&self) -> Duration {
        self.generation + self.search
    }
}

/// Node counts gathered during tree enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Nodes entered, including the ones pruned on entry
    pub nodes_visited: usize,
    /// Branches cut by the three-repeated-letters rule
    pub repeat_prunes: usize,
    /// Branches cut because no dictionary entry starts with the prefix
    pub prefix_prunes: usize,
    /// Dictionary lookups issued
    pub lookups: usize,
}

impl AddAssign for TraversalStats {
    fn add_assign(&mut self, other: Self) {
        self.nodes_visited += other.nodes_visited;
        self.repeat_prunes += other.repeat_prunes;
        self.prefix_prunes += other.prefix_prunes;
        self.lookups += other.lookups;
    }
}

/// Outcome of running one strategy on one puzzle
#[derive(Debug, Clone, Default)]
pub struct Solution {
    pub records: Vec<FoundWord>,
    pub timings: Timings,
    pub traversal: Option<TraversalStats>,
}

impl Solution {
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoundWord> {
        self.records.iter()
    }

    /// Found words in record order
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.word.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timings_total() {
        let timings = Timings {
            generation: Duration::from_millis(3),
            search: Duration::from_millis(4),
        };
        assert_eq!(timings.total(), Duration::from_millis(7));
    }

    #[test]
    fn traversal_stats_accumulate() {
        let mut stats = TraversalStats {
            nodes_visited: 3,
            repeat_prunes: 1,
            prefix_prunes: 0,
            lookups: 2,
        };
        stats += TraversalStats {
            nodes_visited: 4,
            repeat_prunes: 0,
            prefix_prunes: 2,
            lookups: 1,
        };
        assert_eq!(stats.nodes_visited, 7);
        assert_eq!(stats.repeat_prunes, 1);
        assert_eq!(stats.prefix_prunes, 2);
        assert_eq!(stats.lookups, 3);
    }

    #[test]
    fn solution_accessors() {
        let solution = Solution {
            records: vec![FoundWord::new("city", 4), FoundWord::new("clay", 6)],
            ..Solution::default()
        };
        assert_eq!(solution.count(), 2);
        assert_eq!(solution.words(), vec!["city", "clay"]);
        assert_eq!(solution.iter().map(|r| r.length).sum::<usize>(), 8);
    }
}
