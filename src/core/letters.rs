//! Letter set representation
//!
//! A `LetterSet` is the sorted, deduplicated alphabet a puzzle's words are built from.

use super::PuzzleError;
use std::fmt;
use std::str::FromStr;

/// Sorted set of lowercase ASCII letters
///
/// Keeps the letters in ascending order for generation and a bit mask for
/// constant-time membership tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<u8>,
    mask: u32,
}

impl LetterSet {
    /// Create a letter set from characters
    ///
    /// Letters are lowercased, sorted ascending and deduplicated.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidLetter` if any character is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use spellbee_solver::core::LetterSet;
    ///
    /// let letters = LetterSet::new("DorsetY".chars()).unwrap();
    /// assert_eq!(letters.as_bytes(), b"deorsty");
    /// assert!(letters.contains(b'y'));
    ///
    /// assert!(LetterSet::new("ab1".chars()).is_err());
    /// ```
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, PuzzleError> {
        let mut letters = Vec::new();
        for ch in chars {
            letters.push(to_letter(ch)?);
        }
        letters.sort_unstable();
        letters.dedup();

        let mask = letters
            .iter()
            .fold(0, |mask, &letter| mask | bit(letter));

        Ok(Self { letters, mask })
    }

    /// Letters in ascending order
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if a byte is one of the allowed letters
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.mask & bit(letter) != 0
    }

    /// Check if every character of `word` is an allowed letter
    #[must_use]
    pub fn spells(&self, word: &str) -> bool {
        word.bytes().all(|b| self.contains(b))
    }
}

/// Parse letters from text such as `dorsety` or `d,o,r,s,e,t,y`
///
/// Commas and whitespace are ignored.
impl FromStr for LetterSet {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().filter(|c| *c != ',' && !c.is_whitespace()))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.letters {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Normalize a character into a lowercase ASCII letter byte
pub(crate) fn to_letter(ch: char) -> Result<u8, PuzzleError> {
    if ch.is_ascii_alphabetic() {
        Ok(ch.to_ascii_lowercase() as u8)
    } else {
        Err(PuzzleError::InvalidLetter(ch))
    }
}

#[inline]
const fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}
