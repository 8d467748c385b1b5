//! Word lists for Spelling Bee solving
//!
//! Provides the embedded sample dictionary and loaders for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, dictionary_from_slice, load_from_file};
