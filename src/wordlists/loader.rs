//! Word list loading utilities
//!
//! Cleaning is the loader's job: lines are trimmed, lowercased and blank lines
//! skipped here, so the dictionary core never strips whitespace itself.

use crate::dictionary::{DictionaryError, OrderedDictionary};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    /// The word list could not be opened or read.
    #[error("Cannot read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list failed strict validation.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Load an ordered dictionary from a file with one word per line
///
/// With `strict` set, the list is checked for sortedness and rejected if any
/// entry is out of order. Otherwise order is trusted, unless lowercasing
/// changed some entry: a list sorted case-sensitively (`Zoo` before `apple`)
/// can fall out of order, so it is checked and a warning logged.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Dictionary` if `strict` is set and the list is unsorted.
///
/// # Examples
/// ```no_run
/// use spellbee_solver::wordlists::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt", true).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, strict: bool) -> Result<OrderedDictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let recased = content.bytes().any(|b| b.is_ascii_uppercase());
    let dictionary = OrderedDictionary::new(clean_lines(content.lines()));
    log::info!("Loaded {} words from {}", dictionary.len(), path.display());

    if strict {
        dictionary.check_sorted()?;
    } else if recased {
        if let Err(err) = dictionary.check_sorted() {
            log::warn!(
                "{} is out of order after lowercasing, searches may miss words: {err}",
                path.display()
            );
        }
    }

    Ok(dictionary)
}

/// Build an ordered dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use spellbee_solver::wordlists::{WORDS, dictionary_from_slice};
///
/// let dictionary = dictionary_from_slice(WORDS);
/// assert_eq!(dictionary.len(), WORDS.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> OrderedDictionary {
    OrderedDictionary::new(clean_lines(slice.iter().copied()))
}

fn clean_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_word_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn dictionary_from_slice_keeps_order() {
        let dictionary = dictionary_from_slice(&["city", "clay", "pita"]);
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.get(0), Some("city"));
        assert_eq!(dictionary.get(2), Some("pita"));
    }

    #[test]
    fn dictionary_from_slice_cleans_entries() {
        let dictionary = dictionary_from_slice(&["  doses\r", "", "Dress", "dyers\n"]);
        assert_eq!(dictionary.words(), &["doses", "dress", "dyers"]);
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(dictionary_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_trims_lines() {
        let file = temp_word_file("doses\r\ndress \n\n dyers\n");
        let dictionary = load_from_file(file.path(), true).unwrap();

        assert_eq!(dictionary.words(), &["doses", "dress", "dyers"]);
        assert_eq!(dictionary.find("dress"), Some(1));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file("/nonexistent/spellbee/words.txt", false);
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn strict_load_rejects_unsorted_list() {
        let file = temp_word_file("toyed\ndoses\n");
        let strict = load_from_file(file.path(), true);
        let lenient = load_from_file(file.path(), false);

        assert!(matches!(
            strict,
            Err(LoadError::Dictionary(DictionaryError::Unsorted { index: 1, .. }))
        ));
        assert_eq!(lenient.unwrap().len(), 2);
    }

    #[test]
    fn lowercasing_can_unsort_a_case_sorted_list() {
        let file = temp_word_file("Zoo\napple\n");

        let lenient = load_from_file(file.path(), false).unwrap();
        assert_eq!(lenient.words(), &["zoo", "apple"]);
        assert!(lenient.check_sorted().is_err());

        assert!(matches!(
            load_from_file(file.path(), true),
            Err(LoadError::Dictionary(DictionaryError::Unsorted { index: 1, .. }))
        ));
    }

    #[test]
    fn recased_sorted_list_loads_cleanly() {
        let file = temp_word_file("Apple\nZoo\n");
        let dictionary = load_from_file(file.path(), false).unwrap();
        assert_eq!(dictionary.words(), &["apple", "zoo"]);
        assert!(dictionary.check_sorted().is_ok());
    }
}
