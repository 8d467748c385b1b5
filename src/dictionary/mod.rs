//! Ordered dictionary
//!
//! A read-only, lexicographically sorted word list with binary-search lookups.
//! Sortedness is a precondition: it is not checked on construction, and
//! searches on unsorted input return wrong results. `check_sorted` exists for
//! callers that want to validate a list before solving.

mod boundary;
pub mod search;

pub use boundary::Boundary;
pub use search::PrefixMatch;

use crate::core::LetterSet;
use thiserror::Error;

/// Error type for dictionary validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// Entry at `index` sorts before the entry preceding it.
    #[error("Dictionary is not sorted: entry {index} ('{word}') sorts before its predecessor")]
    Unsorted { index: usize, word: String },
}

/// Sorted word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedDictionary {
    words: Vec<String>,
}

impl OrderedDictionary {
    /// Wrap a word list that is already sorted ascending
    ///
    /// No validation is performed; see `check_sorted`.
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Verify the non-decreasing order invariant
    ///
    /// # Errors
    /// Returns `DictionaryError::Unsorted` naming the first out-of-order entry.
    pub fn check_sorted(&self) -> Result<(), DictionaryError> {
        match self.words.windows(2).position(|pair| pair[0] > pair[1]) {
            Some(i) => Err(DictionaryError::Unsorted {
                index: i + 1,
                word: self.words[i + 1].clone(),
            }),
            None => Ok(()),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// All words in order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Index of `word`, or `None` if absent
    #[must_use]
    pub fn find(&self, word: &str) -> Option<usize> {
        search::exact_search(&self.words, word)
    }

    /// Prefix-aware lookup, see [`search::prefix_search`]
    #[must_use]
    pub fn find_prefix(&self, word: &str, as_prefix: bool) -> Option<PrefixMatch> {
        search::prefix_search(&self.words, word, as_prefix)
    }

    /// Check if any entry starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find_prefix(prefix, true).is_some()
    }

    /// Boundary of the entries starting with `letter`
    #[must_use]
    pub fn boundary(&self, letter: u8) -> Boundary {
        Boundary::locate(&self.words, letter)
    }

    /// One boundary per letter of the set, in letter order
    #[must_use]
    pub fn boundaries(&self, letters: &LetterSet) -> Vec<Boundary> {
        let boundaries: Vec<Boundary> = letters
            .as_bytes()
            .iter()
            .map(|&letter| self.boundary(letter))
            .collect();

        log::debug!(
            "Located {} boundaries covering {} entries",
            boundaries.len(),
            boundaries.iter().map(Boundary::len).sum::<usize>()
        );

        boundaries
    }
}

impl<'a> IntoIterator for &'a OrderedDictionary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
