//! Per-letter index ranges
//!
//! A `Boundary` delimits the contiguous block of dictionary entries that start
//! with one letter. Two boundary searches per letter replace a full scan.

use super::search::boundary_search;
use std::ops::RangeInclusive;

/// Inclusive index range of the entries starting with `letter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    pub letter: u8,
    span: Option<(usize, usize)>,
}

impl Boundary {
    /// Locate the boundary of `letter` with two binary searches
    #[must_use]
    pub fn locate<S: AsRef<str>>(words: &[S], letter: u8) -> Self {
        let span = boundary_search(words, letter, false)
            .zip(boundary_search(words, letter, true));

        log::trace!("Boundary for '{}': {span:?}", char::from(letter));

        Self { letter, span }
    }

    /// Inclusive `(low, high)` pair, or `None` when no entry starts with the letter
    #[inline]
    #[must_use]
    pub const fn span(&self) -> Option<(usize, usize)> {
        self.span
    }

    /// Indices covered by this boundary
    ///
    /// Empty for a letter with no entries.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.span
            .map(|(low, high)| low..=high)
            .into_iter()
            .flatten()
    }

    /// Covered range, if any
    #[must_use]
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        self.span.map(|(low, high)| low..=high)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.span.map_or(0, |(low, high)| high - low + 1)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.span.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ace", "doses", "dress", "dyers", "rosey", "toady", "toyed"];

    #[test]
    fn boundary_covers_exactly_the_letter_block() {
        let boundary = Boundary::locate(WORDS, b'd');
        assert_eq!(boundary.span(), Some((1, 3)));
        assert_eq!(boundary.len(), 3);

        let inside: Vec<&str> = boundary.indices().map(|i| WORDS[i]).collect();
        assert_eq!(inside, vec!["doses", "dress", "dyers"]);

        // Neighbours just outside do not start with the letter
        assert!(!WORDS[0].starts_with('d'));
        assert!(!WORDS[4].starts_with('d'));
    }

    #[test]
    fn single_entry_boundary() {
        let boundary = Boundary::locate(WORDS, b'r');
        assert_eq!(boundary.range(), Some(4..=4));
        assert_eq!(boundary.indices().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn empty_boundary_yields_no_indices() {
        let boundary = Boundary::locate(WORDS, b'e');
        assert!(boundary.is_empty());
        assert_eq!(boundary.len(), 0);
        assert_eq!(boundary.range(), None);
        assert_eq!(boundary.indices().count(), 0);
    }

    #[test]
    fn boundaries_at_both_ends() {
        assert_eq!(Boundary::locate(WORDS, b'a').span(), Some((0, 0)));
        assert_eq!(Boundary::locate(WORDS, b't').span(), Some((5, 6)));
    }
}
