//! Binary search primitives over a sorted word slice
//!
//! All three searches require the slice to be in non-decreasing
//! lexicographic order. On unsorted input they return arbitrary results.

use std::cmp::Ordering;

/// Result of a prefix-aware search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch {
    /// Index of the exact match, or of the first entry starting with the prefix
    pub index: usize,
    /// Whether `index` holds the searched word itself
    pub exact: bool,
}

/// Find the index of `word`
///
/// Returns `None` if the word is absent or the slice is empty.
///
/// # Examples
/// ```
/// use spellbee_solver::dictionary::search::exact_search;
///
/// let words = ["doses", "dress", "dyers", "rosey"];
/// assert_eq!(exact_search(&words, "dyers"), Some(2));
/// assert_eq!(exact_search(&words, "dye"), None);
/// ```
#[must_use]
pub fn exact_search<S: AsRef<str>>(words: &[S], word: &str) -> Option<usize> {
    words.binary_search_by(|probe| probe.as_ref().cmp(word)).ok()
}

/// Find the lowest or highest index of the entries starting with `letter`
///
/// Every probe whose first byte equals `letter` is recorded, then the search
/// keeps narrowing toward lower indices (or higher ones when `want_high` is
/// set), so the most extreme match wins. Empty entries sort before any letter.
///
/// # Examples
/// ```
/// use spellbee_solver::dictionary::search::boundary_search;
///
/// let words = ["apt", "dose", "dress", "dyer", "rose"];
/// assert_eq!(boundary_search(&words, b'd', false), Some(1));
/// assert_eq!(boundary_search(&words, b'd', true), Some(3));
/// assert_eq!(boundary_search(&words, b'z', false), None);
/// ```
#[must_use]
pub fn boundary_search<S: AsRef<str>>(words: &[S], letter: u8, want_high: bool) -> Option<usize> {
    let mut low = 0;
    let mut high = words.len();
    let mut result = None;

    while low < high {
        let mid = low + (high - low) / 2;
        let first = words[mid].as_ref().as_bytes().first().copied();

        match first.cmp(&Some(letter)) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => {
                result = Some(mid);
                if want_high {
                    low = mid + 1;
                } else {
                    high = mid;
                }
            }
        }
    }

    result
}

/// Search for `word`, optionally accepting entries that merely start with it
///
/// With `as_prefix` unset this is a plain exact search. With it set, a probe
/// that starts with `word` is remembered and the search keeps narrowing toward
/// the exact entry, so a word that is also a prefix of longer words is still
/// found exactly. Returns `None` only when no entry equals or starts with `word`.
///
/// # Examples
/// ```
/// use spellbee_solver::dictionary::search::prefix_search;
///
/// let words = ["dot", "dote", "doted", "doter", "dotes"];
///
/// let hit = prefix_search(&words, "dote", true).unwrap();
/// assert_eq!((hit.index, hit.exact), (1, true));
///
/// let partial = prefix_search(&words, "dotin", true);
/// assert!(partial.is_none());
///
/// let prefix = prefix_search(&["doted", "doter"], "dote", true).unwrap();
/// assert_eq!((prefix.index, prefix.exact), (0, false));
/// ```
#[must_use]
pub fn prefix_search<S: AsRef<str>>(words: &[S], word: &str, as_prefix: bool) -> Option<PrefixMatch> {
    let mut low = 0;
    let mut high = words.len();
    let mut candidate = None;

    while low < high {
        let mid = low + (high - low) / 2;
        let current = words[mid].as_ref();

        match current.cmp(word) {
            Ordering::Equal => {
                return Some(PrefixMatch {
                    index: mid,
                    exact: true,
                });
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if as_prefix && current.starts_with(word) {
                    candidate = Some(PrefixMatch {
                        index: mid,
                        exact: false,
                    });
                }
                high = mid;
            }
        }
    }

    candidate
}
