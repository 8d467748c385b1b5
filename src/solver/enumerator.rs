//! Tree enumeration
//!
//! Depth-first generation of every letter sequence over the letter set up to
//! the maximum length. The tree is never materialized: the current prefix and
//! its depth are the only traversal state.
//!
//! Two prunes cut the search space:
//! - a prefix ending in three identical letters is abandoned before expansion
//!   (dictionary words never contain such runs)
//! - optionally, a prefix that begins no dictionary entry is abandoned, either
//!   at one fixed depth through a precomputed [`PrefixIndex`] or at every depth
//!   through a prefix-aware binary search
//!
//! Candidates are matched against the dictionary either during the traversal
//! ([`LookupMode::Integrated`]) or afterwards by set intersection
//! ([`LookupMode::Batch`]).

use super::prefix::PrefixIndex;
use super::solution::{Solution, Timings, TraversalStats};
use super::strategy::Strategy;
use crate::core::{FoundWord, Puzzle};
use crate::dictionary::{OrderedDictionary, PrefixMatch};
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// When candidates are checked against the dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Exact-match binary search at each qualifying node
    #[default]
    Integrated,
    /// Collect qualifying candidates, then intersect with the dictionary once
    Batch,
}

/// Prefix infeasibility pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixPrune {
    Off,
    /// Check prefixes of this length against a precomputed index
    AtDepth(usize),
    /// Prefix-search the dictionary at every node
    EveryDepth,
}

impl Default for PrefixPrune {
    fn default() -> Self {
        Self::AtDepth(2)
    }
}

/// Which depths are checked for words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Checkpoints {
    /// Every prefix whose length lies within the puzzle bounds
    #[default]
    EveryDepth,
    /// Only prefixes of exactly the maximum length
    LeavesOnly,
}

/// Enumerator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnumeratorOptions {
    pub lookup: LookupMode,
    pub prefix_prune: PrefixPrune,
    pub checkpoints: Checkpoints,
}

impl EnumeratorOptions {
    /// Build the prefix index these options need, if any
    pub(crate) fn prefix_index(
        &self,
        puzzle: &Puzzle,
        dictionary: &OrderedDictionary,
    ) -> Option<PrefixIndex> {
        match self.prefix_prune {
            PrefixPrune::AtDepth(length) if length > 0 && length <= puzzle.max_length() => {
                Some(PrefixIndex::build(puzzle.letters(), dictionary, length))
            }
            _ => None,
        }
    }
}

/// Single-threaded tree enumerator
///
/// # Examples
/// ```
/// use spellbee_solver::core::Puzzle;
/// use spellbee_solver::solver::{Enumerator, Strategy};
/// use spellbee_solver::wordlists::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(&["doses", "dress", "dyers", "rosey", "toady", "toyed"]);
/// let puzzle = Puzzle::new("dorsety".parse().unwrap(), 'y', 4, 5).unwrap();
///
/// let solution = Enumerator::default().solve(&puzzle, &dictionary);
/// assert_eq!(solution.words(), vec!["dyers", "rosey", "toyed"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Enumerator {
    options: EnumeratorOptions,
}

impl Enumerator {
    #[must_use]
    pub const fn new(options: EnumeratorOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &EnumeratorOptions {
        &self.options
    }
}

impl Strategy for Enumerator {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn solve(&self, puzzle: &Puzzle, dictionary: &OrderedDictionary) -> Solution {
        let start = Instant::now();
        let prefixes = self.options.prefix_index(puzzle, dictionary);

        let mut traversal = Traversal::new(puzzle, dictionary, self.options, prefixes.as_ref());
        for &letter in puzzle.letters().as_bytes() {
            traversal.visit(letter, false);
        }

        assemble(
            vec![traversal.finish()],
            dictionary,
            self.options.lookup,
            start.elapsed(),
        )
    }
}

/// Results of one traversal, before merging
#[derive(Debug, Default)]
pub(crate) struct Partial {
    found: Vec<FoundWord>,
    candidates: FxHashSet<String>,
    stats: TraversalStats,
    lookup_time: Duration,
}

/// Upper bound on the prefix buffer reserved up front
const PREFIX_RESERVE: usize = 32;

/// Depth-first traversal state
pub(crate) struct Traversal<'a> {
    puzzle: &'a Puzzle,
    dictionary: &'a OrderedDictionary,
    options: EnumeratorOptions,
    prefixes: Option<&'a PrefixIndex>,
    prefix: String,
    partial: Partial,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(
        puzzle: &'a Puzzle,
        dictionary: &'a OrderedDictionary,
        options: EnumeratorOptions,
        prefixes: Option<&'a PrefixIndex>,
    ) -> Self {
        Self {
            puzzle,
            dictionary,
            options,
            prefixes,
            prefix: String::with_capacity(puzzle.max_length().min(PREFIX_RESERVE)),
            partial: Partial::default(),
        }
    }

    /// Enter the child node for `letter` and explore its subtree
    pub(crate) fn visit(&mut self, letter: u8, has_required: bool) {
        self.prefix.push(char::from(letter));
        self.partial.stats.nodes_visited += 1;

        self.explore(has_required || letter == self.puzzle.required());

        self.prefix.pop();
    }

    pub(crate) fn finish(self) -> Partial {
        self.partial
    }

    fn explore(&mut self, has_required: bool) {
        let depth = self.prefix.len();

        if ends_with_run(self.prefix.as_bytes()) {
            self.partial.stats.repeat_prunes += 1;
            return;
        }

        let mut known = None;
        let prune = self.options.prefix_prune;
        match prune {
            PrefixPrune::AtDepth(length) if depth == length => {
                if self.prefixes.is_some_and(|index| !index.contains(&self.prefix)) {
                    self.partial.stats.prefix_prunes += 1;
                    return;
                }
            }
            PrefixPrune::EveryDepth => match self.lookup(true) {
                Some(hit) => known = Some(hit),
                None => {
                    self.partial.stats.prefix_prunes += 1;
                    return;
                }
            },
            _ => {}
        }

        if self.is_checkpoint(depth, has_required) {
            self.check(known);
        }

        if depth < self.puzzle.max_length() {
            let puzzle = self.puzzle;
            for &letter in puzzle.letters().as_bytes() {
                self.visit(letter, has_required);
            }
        }
    }

    fn is_checkpoint(&self, depth: usize, has_required: bool) -> bool {
        has_required
            && self.puzzle.accepts_length(depth)
            && match self.options.checkpoints {
                Checkpoints::EveryDepth => true,
                Checkpoints::LeavesOnly => depth == self.puzzle.max_length(),
            }
    }

    fn check(&mut self, known: Option<PrefixMatch>) {
        match self.options.lookup {
            LookupMode::Integrated => {
                let hit = known.or_else(|| self.lookup(false));
                if let Some(PrefixMatch { index, exact: true }) = hit {
                    self.partial
                        .found
                        .push(FoundWord::new(self.prefix.clone(), index));
                }
            }
            LookupMode::Batch => {
                self.partial.candidates.insert(self.prefix.clone());
            }
        }
    }

    fn lookup(&mut self, as_prefix: bool) -> Option<PrefixMatch> {
        let started = Instant::now();
        let hit = self.dictionary.find_prefix(&self.prefix, as_prefix);
        self.partial.lookup_time += started.elapsed();
        self.partial.stats.lookups += 1;
        hit
    }
}

/// Check if the prefix ends with three identical letters
fn ends_with_run(prefix: &[u8]) -> bool {
    matches!(prefix, [.., a, b, c] if a == b && b == c)
}

/// Check if three identical letters appear anywhere in the word
pub(crate) fn contains_run(word: &[u8]) -> bool {
    word.windows(3).any(ends_with_run)
}

/// Merge traversal results into a solution
///
/// Integrated records keep partition order. Batch candidates are intersected
/// with the dictionary and sorted.
pub(crate) fn assemble(
    partials: Vec<Partial>,
    dictionary: &OrderedDictionary,
    lookup: LookupMode,
    elapsed: Duration,
) -> Solution {
    let mut merged = Partial::default();
    for partial in partials {
        merged.found.extend(partial.found);
        merged.candidates.extend(partial.candidates);
        merged.stats += partial.stats;
        merged.lookup_time += partial.lookup_time;
    }

    log::debug!(
        "Traversal visited {} nodes ({} repeat prunes, {} prefix prunes, {} lookups)",
        merged.stats.nodes_visited,
        merged.stats.repeat_prunes,
        merged.stats.prefix_prunes,
        merged.stats.lookups
    );

    let (records, timings) = match lookup {
        LookupMode::Integrated => (
            merged.found,
            Timings {
                generation: elapsed.saturating_sub(merged.lookup_time),
                search: merged.lookup_time,
            },
        ),
        LookupMode::Batch => {
            log::debug!("Intersecting {} candidates", merged.candidates.len());
            let started = Instant::now();
            let records = intersect(&merged.candidates, dictionary);
            (
                records,
                Timings {
                    generation: elapsed,
                    search: started.elapsed(),
                },
            )
        }
    };

    Solution {
        records,
        timings,
        traversal: Some(merged.stats),
    }
}

fn intersect(candidates: &FxHashSet<String>, dictionary: &OrderedDictionary) -> Vec<FoundWord> {
    let mut records: Vec<FoundWord> = dictionary
        .iter()
        .enumerate()
        .filter(|&(_, word)| candidates.contains(word))
        .map(|(index, word)| FoundWord::new(word, index))
        .collect();
    records.sort_by(|a, b| a.word.cmp(&b.word));
    records
}
