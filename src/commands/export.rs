//! CSV export of found words
//!
//! One row per record: `Word,Length,Index` with the zero-based dictionary index.
//! Words are lowercase alphabetic tokens, so no field quoting is needed.

use super::solve::SolveReport;
use crate::core::FoundWord;
use crate::output::formatters::format_duration;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Write records as CSV with a header row
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_csv<W: Write>(writer: W, records: &[FoundWord]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "Word,Length,Index")?;
    for record in records {
        writeln!(writer, "{},{},{}", record.word, record.length, record.index)?;
    }
    writer.flush()
}

/// Default CSV file name for a report
///
/// Encodes strategy, letters, required letter, bounds and total duration, e.g.
/// `tree-deorsty-y-4-7-1.52ms.csv` or `deorsty-y-dictionary-4-7-41.30us.csv`.
#[must_use]
pub fn default_file_name(report: &SolveReport) -> String {
    let puzzle = &report.puzzle;
    let letters = puzzle.letters();
    let required = char::from(puzzle.required());
    let (min, max) = (puzzle.min_length(), puzzle.max_length());
    let duration = format_duration(report.solution.timings.total(), 2);

    if report.strategy == "dictionary" {
        format!("{letters}-{required}-dictionary-{min}-{max}-{duration}.csv")
    } else {
        format!("{}-{letters}-{required}-{min}-{max}-{duration}.csv", report.strategy)
    }
}

/// Save a report's records, to `path` or to the default file name
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_csv(report: &SolveReport, path: Option<&Path>) -> io::Result<PathBuf> {
    let path = path.map_or_else(|| PathBuf::from(default_file_name(report)), Path::to_path_buf);
    write_csv(File::create(&path)?, &report.solution.records)?;

    log::info!(
        "Saved {} {} records to {}",
        report.solution.count(),
        report.strategy,
        path.display()
    );
    Ok(path)
}
