//! Puzzle constraint
//!
//! Bundles the letter set, required letter and inclusive length bounds that
//! every accepted word must satisfy.

use super::letters::to_letter;
use super::{LetterSet, PuzzleError};
use std::fmt;
use std::ops::RangeInclusive;

/// A Spelling Bee style puzzle
///
/// Immutable once built; both solving strategies read the same `Puzzle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    letters: LetterSet,
    required: u8,
    min_length: usize,
    max_length: usize,
}

impl Puzzle {
    /// Create a puzzle, validating the length bounds
    ///
    /// The required letter is not forced to be part of `letters`; such a
    /// puzzle simply has no answers.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - `min_length > max_length`
    /// - `min_length` is zero
    /// - The required letter is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use spellbee_solver::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new("dorsety".parse().unwrap(), 'y', 4, 5).unwrap();
    /// assert!(puzzle.accepts("dyers"));
    /// assert!(!puzzle.accepts("doses"));
    ///
    /// assert!(Puzzle::new("dorsety".parse().unwrap(), 'y', 6, 5).is_err());
    /// ```
    pub fn new(
        letters: LetterSet,
        required: char,
        min_length: usize,
        max_length: usize,
    ) -> Result<Self, PuzzleError> {
        Self::check_lengths(min_length, max_length)?;

        let required = to_letter(required)?;
        if !letters.contains(required) {
            log::warn!(
                "Required letter '{}' is not in letter set '{letters}', no word can match",
                char::from(required)
            );
        }

        Ok(Self {
            letters,
            required,
            min_length,
            max_length,
        })
    }

    /// Validate inclusive length bounds without building a puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError` if `min_length > max_length` or `min_length` is zero.
    pub const fn check_lengths(min_length: usize, max_length: usize) -> Result<(), PuzzleError> {
        if min_length > max_length {
            return Err(PuzzleError::InvalidLengthBounds {
                min: min_length,
                max: max_length,
            });
        }
        if min_length == 0 {
            return Err(PuzzleError::ZeroLength);
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// The letter every accepted word must contain
    #[inline]
    #[must_use]
    pub const fn required(&self) -> u8 {
        self.required
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Inclusive range of accepted word lengths
    #[must_use]
    pub const fn lengths(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    /// Check if a word length lies within the bounds
    #[inline]
    #[must_use]
    pub const fn accepts_length(&self, length: usize) -> bool {
        self.min_length <= length && length <= self.max_length
    }

    /// Check if a word contains the required letter anywhere
    #[inline]
    #[must_use]
    pub fn has_required(&self, word: &str) -> bool {
        word.bytes().any(|b| b == self.required)
    }

    /// Full acceptance test for a dictionary word
    ///
    /// Length bounds, required letter, and every character drawn from the letter set.
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        self.accepts_length(word.len()) && self.has_required(word) && self.letters.spells(word)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.letters,
            char::from(self.required),
            self.min_length,
            self.max_length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(letters: &str, required: char, min: usize, max: usize) -> Puzzle {
        Puzzle::new(letters.parse().unwrap(), required, min, max).unwrap()
    }

    #[test]
    fn inverted_bounds_rejected() {
        let result = Puzzle::new("dorsety".parse().unwrap(), 'y', 7, 4);
        assert_eq!(
            result,
            Err(PuzzleError::InvalidLengthBounds { min: 7, max: 4 })
        );
    }

    #[test]
    fn zero_length_rejected() {
        let result = Puzzle::new("dorsety".parse().unwrap(), 'y', 0, 4);
        assert_eq!(result, Err(PuzzleError::ZeroLength));
    }

    #[test]
    fn check_lengths_matches_constructor() {
        assert_eq!(Puzzle::check_lengths(4, 7), Ok(()));
        assert_eq!(Puzzle::check_lengths(1, 1), Ok(()));
        assert_eq!(
            Puzzle::check_lengths(6, 5),
            Err(PuzzleError::InvalidLengthBounds { min: 6, max: 5 })
        );
        assert_eq!(Puzzle::check_lengths(0, 5), Err(PuzzleError::ZeroLength));
    }

    #[test]
    fn equal_bounds_allowed() {
        let p = puzzle("aptiylc", 'c', 4, 4);
        assert_eq!(p.lengths(), 4..=4);
    }

    #[test]
    fn required_letter_normalized() {
        let p = puzzle("dorsety", 'Y', 4, 5);
        assert_eq!(p.required(), b'y');
    }

    #[test]
    fn invalid_required_letter_rejected() {
        let result = Puzzle::new("dorsety".parse().unwrap(), '?', 4, 5);
        assert_eq!(result, Err(PuzzleError::InvalidLetter('?')));
    }

    #[test]
    fn required_letter_outside_set_allowed() {
        let p = puzzle("dorset", 'y', 4, 5);
        assert!(!p.accepts("dyers"));
        assert!(!p.accepts("doses"));
    }

    #[test]
    fn accepts_dyers_rejects_doses() {
        let p = puzzle("dorsety", 'y', 4, 5);
        assert!(p.accepts("dyers"));
        assert!(!p.accepts("doses")); // no 'y'
        assert!(!p.accepts("toady")); // 'a' not allowed
        assert!(!p.accepts("dye")); // too short
        assert!(!p.accepts("oyster")); // too long
    }

    #[test]
    fn accepts_city_not_cacti_or_pita() {
        let p = puzzle("aptiylc", 'c', 4, 4);
        assert!(p.accepts("city"));
        assert!(!p.accepts("cacti")); // length 5
        assert!(!p.accepts("pita")); // missing 'c'
    }

    #[test]
    fn display_label() {
        let p = puzzle("dorsety", 'y', 4, 5);
        assert_eq!(p.to_string(), "deorsty-y-4-5");
    }
}
