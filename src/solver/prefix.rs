//! Prefix feasibility index
//!
//! Precomputes which fixed-length prefixes over the letter set begin at least
//! one dictionary entry, so the enumerator can abandon whole subtrees at a
//! shallow depth with a hash lookup.

use crate::core::LetterSet;
use crate::dictionary::OrderedDictionary;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::iter;

/// Set of feasible prefixes of one length
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    length: usize,
    prefixes: FxHashSet<String>,
}

impl PrefixIndex {
    /// Check every `length`-letter sequence over `letters` against the dictionary
    ///
    /// Costs |letters|^length prefix binary searches.
    ///
    /// # Examples
    /// ```
    /// use spellbee_solver::core::LetterSet;
    /// use spellbee_solver::solver::PrefixIndex;
    /// use spellbee_solver::wordlists::dictionary_from_slice;
    ///
    /// let dictionary = dictionary_from_slice(&["doses", "dress", "dyers", "rosey"]);
    /// let letters: LetterSet = "dorsety".parse().unwrap();
    ///
    /// let index = PrefixIndex::build(&letters, &dictionary, 2);
    /// assert!(index.contains("dr"));
    /// assert!(!index.contains("dd"));
    /// assert_eq!(index.len(), 4); // do, dr, dy, ro
    /// ```
    #[must_use]
    pub fn build(letters: &LetterSet, dictionary: &OrderedDictionary, length: usize) -> Self {
        if length == 0 || letters.is_empty() {
            return Self {
                length,
                prefixes: FxHashSet::default(),
            };
        }

        let prefixes: FxHashSet<String> = iter::repeat_n(letters.as_bytes().iter(), length)
            .multi_cartesian_product()
            .map(|combo| combo.into_iter().map(|&b| char::from(b)).collect::<String>())
            .filter(|prefix| dictionary.has_prefix(prefix))
            .collect();

        log::debug!(
            "Prefix index: {} of {} {length}-letter prefixes are feasible",
            prefixes.len(),
            letters.len().saturating_pow(length as u32)
        );

        Self { length, prefixes }
    }

    /// Prefix length this index was built for
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}
