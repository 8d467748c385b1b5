//! Puzzle configuration errors

use thiserror::Error;

/// Error type for invalid puzzle configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The inclusive length bounds are inverted.
    #[error("Minimum word length {min} cannot be greater than maximum word length {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    /// Word lengths start at one letter.
    #[error("Word lengths must be at least 1")]
    ZeroLength,

    /// A letter or required letter is not an ASCII letter.
    #[error("'{0}' is not an ASCII letter")]
    InvalidLetter(char),
}
