//! Found word records

use std::fmt;

/// A validated puzzle answer
///
/// Holds the word, its length (the depth it was generated at) and its
/// zero-based position in the ordered dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoundWord {
    pub word: String,
    pub length: usize,
    pub index: usize,
}

impl FoundWord {
    #[must_use]
    pub fn new(word: impl Into<String>, index: usize) -> Self {
        let word = word.into();
        Self {
            length: word.len(),
            word,
            index,
        }
    }
}

impl fmt::Display for FoundWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
