//! Build script embedding the sample dictionary
//!
//! The dictionary is searched by binary search, so the list is checked for
//! order and lowercase ASCII here rather than at every start-up.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const INPUT: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(INPUT).unwrap_or_else(|e| panic!("Failed to read {INPUT}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for (line, word) in words.iter().enumerate() {
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{INPUT}: '{word}' is not lowercase ASCII"
        );
        if line > 0 {
            assert!(words[line - 1] <= *word, "{INPUT}: '{word}' is out of order");
        }
    }

    let mut source = String::new();
    writeln!(source, "/// Sorted sample dictionary ({} words)", words.len()).unwrap();
    writeln!(source, "pub const WORDS: &[&str] = &[").unwrap();
    for word in &words {
        writeln!(source, "    \"{word}\",").unwrap();
    }
    writeln!(source, "];\n").unwrap();
    writeln!(source, "/// Number of words in WORDS").unwrap();
    writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    let output = Path::new(&out_dir).join("words.rs");
    fs::write(&output, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output.display()));

    println!("cargo:rerun-if-changed={INPUT}");
}
