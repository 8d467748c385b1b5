//! Display functions for command results

use super::formatters::{format_duration, percentage, traversal_summary};
use crate::commands::{BenchmarkResult, Comparison, SolveReport};
use crate::core::FoundWord;
use colored::Colorize;

/// Print the result of solving a puzzle
pub fn print_solve_report(report: &SolveReport, show_words: bool, decimals: usize) {
    let puzzle = &report.puzzle;
    let solution = &report.solution;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} solver results",
        report.strategy.to_uppercase().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\nLetters:             {}", puzzle.letters().to_string().bright_yellow());
    println!(
        "Required letter:     {}",
        char::from(puzzle.required()).to_string().bright_yellow().bold()
    );
    println!("Word length:         {}-{}", puzzle.min_length(), puzzle.max_length());

    if let Some(stats) = &solution.traversal {
        println!("Traversal:           {}", traversal_summary(stats));
    }

    if solution.records.is_empty() {
        println!(
            "\n{}",
            format!(
                "No word contains '{}' or meets the length criteria.",
                char::from(puzzle.required())
            )
            .yellow()
        );
    } else if show_words {
        println!("\nFound {} words:\n", solution.count().to_string().green().bold());
        print_records(&solution.records);
    } else {
        println!("\nFound {} words", solution.count().to_string().green().bold());
    }

    println!(
        "\nGeneration: {}",
        format_duration(solution.timings.generation, decimals)
    );
    println!("Search:     {}", format_duration(solution.timings.search, decimals));
    println!(
        "Total:      {}",
        format_duration(solution.timings.total(), decimals).bright_yellow()
    );
}

/// Print found records with their 1-based dictionary position
pub fn print_records(records: &[FoundWord]) {
    for record in records {
        println!(
            "  Word: {:<12} Length: {:<3} Index: {}",
            record.word,
            record.length,
            record.index + 1
        );
    }
}

/// Print a side-by-side comparison of two strategies
pub fn print_comparison(comparison: &Comparison, decimals: usize) {
    let left = &comparison.left;
    let right = &comparison.right;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "COMPARISON:".bright_cyan().bold(),
        format!("{} vs {}", left.strategy, right.strategy).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\nPuzzle: {}", left.puzzle);

    println!("\n  {:<12} {:>8} {:>14}", "Strategy", "Words", "Total time");
    for report in [left, right] {
        println!(
            "  {:<12} {:>8} {:>14}",
            report.strategy,
            report.solution.count(),
            format_duration(report.solution.timings.total(), decimals)
        );
    }

    if comparison.is_consistent() {
        println!("\n{}", "✅ Both strategies found the same words".green().bold());
        return;
    }

    println!("\n{}", "❌ Strategies disagree".red().bold());
    for (name, missing) in [
        (right.strategy, comparison.only_in_left()),
        (left.strategy, comparison.only_in_right()),
    ] {
        if !missing.is_empty() {
            let words: Vec<&str> = missing.iter().map(|r| r.word.as_str()).collect();
            println!("  Missing from {name}: {}", words.join(", ").red());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, decimals: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Cross-validation:".bright_cyan().bold());
    println!("   Puzzles tested:   {}", result.puzzles);
    println!(
        "   Consistent:       {} {}",
        result.consistent,
        format!("({:.1}%)", percentage(result.consistent, result.puzzles)).green()
    );
    if !result.mismatches.is_empty() {
        println!(
            "   Mismatched:       {}",
            result.mismatches.join(", ").red()
        );
    }
    println!("   Words found:      {}", result.words_found);

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   {:<16}  {}",
        format!("{}:", result.left_name),
        format_duration(result.left_time, decimals).bright_yellow()
    );
    println!(
        "   {:<16}  {}",
        format!("{}:", result.right_name),
        format_duration(result.right_time, decimals).bright_yellow()
    );
    println!("   Wall clock:        {}", format_duration(result.duration, decimals));
}
