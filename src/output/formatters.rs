//! Formatting utilities for terminal output

use crate::solver::TraversalStats;
use std::time::Duration;

/// Format a duration in the largest fitting unit
///
/// Minutes above 60 s, seconds above 1 s, milliseconds above 1 ms,
/// microseconds otherwise.
///
/// # Examples
/// ```
/// use spellbee_solver::output::formatters::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(90), 2), "1.50min");
/// assert_eq!(format_duration(Duration::from_millis(2500), 1), "2.5sec");
/// assert_eq!(format_duration(Duration::from_micros(1520), 2), "1.52ms");
/// assert_eq!(format_duration(Duration::from_micros(41), 2), "41.00us");
/// ```
#[must_use]
pub fn format_duration(duration: Duration, decimals: usize) -> String {
    let secs = duration.as_secs_f64();

    if secs > 60.0 {
        format!("{:.decimals$}min", secs / 60.0)
    } else if secs > 1.0 {
        format!("{secs:.decimals$}sec")
    } else if secs > 0.001 {
        format!("{:.decimals$}ms", secs * 1_000.0)
    } else {
        format!("{:.decimals$}us", secs * 1_000_000.0)
    }
}

/// One-line summary of traversal statistics
#[must_use]
pub fn traversal_summary(stats: &TraversalStats) -> String {
    format!(
        "{} nodes, {} repeat prunes, {} prefix prunes, {} lookups",
        stats.nodes_visited, stats.repeat_prunes, stats.prefix_prunes, stats.lookups
    )
}

/// Percentage of `part` in `whole`, 0 for an empty whole
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_unit_boundaries() {
        assert_eq!(format_duration(Duration::from_secs(60), 2), "60.00sec");
        assert_eq!(format_duration(Duration::from_secs(1), 2), "1000.00ms");
        assert_eq!(format_duration(Duration::from_millis(1), 2), "1000.00us");
        assert_eq!(format_duration(Duration::ZERO, 2), "0.00us");
    }

    #[test]
    fn duration_decimals() {
        assert_eq!(format_duration(Duration::from_millis(1234), 0), "1sec");
        assert_eq!(format_duration(Duration::from_millis(1234), 3), "1.234sec");
    }

    #[test]
    fn traversal_summary_lists_counts() {
        let stats = TraversalStats {
            nodes_visited: 10,
            repeat_prunes: 1,
            prefix_prunes: 2,
            lookups: 3,
        };
        assert_eq!(
            traversal_summary(&stats),
            "10 nodes, 1 repeat prunes, 2 prefix prunes, 3 lookups"
        );
    }

    #[test]
    fn percentage_handles_empty_whole() {
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!(percentage(3, 0).abs() < f64::EPSILON);
    }
}
