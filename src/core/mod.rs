//! Core domain types for Spelling Bee puzzles
//!
//! Letter sets, puzzle constraints and the records produced by solving.
//! Everything here is pure and independent of the solving strategies.

mod error;
mod letters;
mod puzzle;
mod record;

pub use error::PuzzleError;
pub use letters::LetterSet;
pub use puzzle::Puzzle;
pub use record::FoundWord;
