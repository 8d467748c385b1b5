//! Spelling Bee Solver
//!
//! Finds every dictionary word that can be spelled from a small set of letters,
//! contains a required letter and falls within a length range. Two families of
//! strategies answer the same question: a depth-first enumeration of letter
//! sequences with pruning, and a range scan over per-letter dictionary
//! boundaries. Both produce the same set of words.
//!
//! # Quick Start
//!
//! ```rust
//! use spellbee_solver::core::Puzzle;
//! use spellbee_solver::solver::{DictionaryMatcher, Enumerator, Strategy};
//! use spellbee_solver::wordlists::{WORDS, dictionary_from_slice};
//!
//! let dictionary = dictionary_from_slice(WORDS);
//! let puzzle = Puzzle::new("dorsety".parse().unwrap(), 'y', 4, 5).unwrap();
//!
//! let tree = Enumerator::default().solve(&puzzle, &dictionary);
//! let scan = DictionaryMatcher.solve(&puzzle, &dictionary);
//! assert_eq!(tree.words(), scan.words());
//! ```

// Core domain types
pub mod core;

// Ordered dictionary and its searches
pub mod dictionary;

// Solving strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
