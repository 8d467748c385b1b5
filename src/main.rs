//! Spelling Bee Solver - CLI
//!
//! Solves letter puzzles by tree enumeration or dictionary scanning, compares
//! the two, and benchmarks them on random puzzles.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use spellbee_solver::{
    commands::{BenchmarkConfig, SolveReport, compare, run_benchmark, save_csv, solve_puzzle},
    core::{LetterSet, Puzzle},
    dictionary::OrderedDictionary,
    output::{print_benchmark_result, print_comparison, print_solve_report},
    solver::{
        Checkpoints, DictionaryMatcher, EnumeratorOptions, LookupMode, PrefixPrune, StrategyType,
    },
    wordlists::{WORDS, dictionary_from_slice, load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "spellbee_solver",
    about = "Spelling Bee solver comparing tree enumeration with dictionary scanning",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'builtin' (default) or path to a sorted file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Reject word lists that are not sorted
    #[arg(long, global = true)]
    strict: bool,

    /// Decimal places in reported durations
    #[arg(long, global = true, default_value = "2")]
    decimals: usize,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate letter sequences and look them up in the dictionary
    Tree {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        #[command(flatten)]
        tree: TreeArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Scan the dictionary ranges of the puzzle letters
    Dictionary {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Run tree and dictionary strategies on one puzzle and compare them
    Vs {
        #[command(flatten)]
        puzzle: PuzzleArgs,

        #[command(flatten)]
        tree: TreeArgs,

        /// Save both result sets as CSV
        #[arg(long)]
        save: bool,
    },

    /// Cross-validate tree and dictionary strategies on random puzzles
    Benchmark {
        /// Number of random puzzles
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Distinct letters per puzzle
        #[arg(long, default_value = "7")]
        letters: usize,

        /// RNG seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "4")]
        min: usize,

        #[arg(long, default_value = "7")]
        max: usize,

        #[command(flatten)]
        tree: TreeArgs,
    },
}

#[derive(Args)]
struct PuzzleArgs {
    /// Puzzle letters, e.g. 'dorsety' or 'd,o,r,s,e,t,y'
    letters: String,

    /// Letter every word must contain
    required: char,

    /// Minimum word length
    #[arg(long, default_value = "4")]
    min: usize,

    /// Maximum word length
    #[arg(long, default_value = "7")]
    max: usize,
}

#[derive(Args)]
struct TreeArgs {
    /// When candidates are matched against the dictionary
    #[arg(long, value_enum, default_value_t = Mode::Integrated)]
    mode: Mode,

    /// Prefix length checked against the feasibility index (0 disables)
    #[arg(long, default_value = "2", conflicts_with = "every_depth")]
    prefix_depth: usize,

    /// Prefix-search the dictionary at every node instead
    #[arg(long)]
    every_depth: bool,

    /// Only check sequences of exactly the maximum length
    #[arg(long)]
    leaves_only: bool,

    /// Partition the enumeration across threads by first letter
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct ReportArgs {
    /// Print every found word
    #[arg(long)]
    show: bool,

    /// Save found words as CSV
    #[arg(long)]
    save: bool,

    /// CSV path (default: derived from the puzzle and timing)
    #[arg(short, long, requires = "save")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Integrated,
    Batch,
}

impl PuzzleArgs {
    fn to_puzzle(&self) -> Result<Puzzle> {
        let letters: LetterSet = self
            .letters
            .parse()
            .with_context(|| format!("Invalid letters '{}'", self.letters))?;
        Puzzle::new(letters, self.required, self.min, self.max).context("Invalid puzzle")
    }
}

impl TreeArgs {
    fn options(&self) -> EnumeratorOptions {
        let prefix_prune = if self.every_depth {
            PrefixPrune::EveryDepth
        } else if self.prefix_depth == 0 {
            PrefixPrune::Off
        } else {
            PrefixPrune::AtDepth(self.prefix_depth)
        };

        EnumeratorOptions {
            lookup: match self.mode {
                Mode::Integrated => LookupMode::Integrated,
                Mode::Batch => LookupMode::Batch,
            },
            prefix_prune,
            checkpoints: if self.leaves_only {
                Checkpoints::LeavesOnly
            } else {
                Checkpoints::EveryDepth
            },
        }
    }

    fn strategy(&self) -> StrategyType {
        let name = if self.parallel { "parallel" } else { "tree" };
        StrategyType::from_name(name, self.options())
    }
}

/// Load the dictionary selected by the -w flag
///
/// - "builtin": the embedded sample list
/// - "<path>": one word per line, cleaned by the loader
fn load_dictionary(wordlist: &str, strict: bool) -> Result<OrderedDictionary> {
    if wordlist == "builtin" {
        let dictionary = dictionary_from_slice(WORDS);
        if strict {
            dictionary.check_sorted()?;
        }
        return Ok(dictionary);
    }

    load_from_file(wordlist, strict).with_context(|| format!("Failed to load wordlist '{wordlist}'"))
}

/// A command with its puzzle input already validated
enum Job {
    Solve {
        strategy: StrategyType,
        puzzle: Puzzle,
        report: ReportArgs,
    },
    Compare {
        strategy: StrategyType,
        puzzle: Puzzle,
        save: bool,
    },
    Benchmark {
        strategy: StrategyType,
        config: BenchmarkConfig,
    },
}

impl Commands {
    /// Validate letters and length bounds, before any word list is read
    fn into_job(self) -> Result<Job> {
        Ok(match self {
            Self::Tree {
                puzzle,
                tree,
                report,
            } => Job::Solve {
                strategy: tree.strategy(),
                puzzle: puzzle.to_puzzle()?,
                report,
            },
            Self::Dictionary { puzzle, report } => Job::Solve {
                strategy: StrategyType::Dictionary(DictionaryMatcher),
                puzzle: puzzle.to_puzzle()?,
                report,
            },
            Self::Vs { puzzle, tree, save } => Job::Compare {
                strategy: tree.strategy(),
                puzzle: puzzle.to_puzzle()?,
                save,
            },
            Self::Benchmark {
                count,
                letters,
                seed,
                min,
                max,
                tree,
            } => {
                let config = BenchmarkConfig {
                    count,
                    letter_count: letters,
                    min_length: min,
                    max_length: max,
                    seed,
                    show_progress: true,
                };
                config.validate().context("Invalid benchmark lengths")?;
                Job::Benchmark {
                    strategy: tree.strategy(),
                    config,
                }
            }
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let job = cli.command.into_job()?;

    let dictionary = load_dictionary(&cli.wordlist, cli.strict)?;
    if dictionary.is_empty() {
        log::warn!("Wordlist '{}' contains no words", cli.wordlist);
    }

    match job {
        Job::Solve {
            strategy,
            puzzle,
            report,
        } => {
            let result = solve_puzzle(&strategy, &puzzle, &dictionary);
            finish_report(&result, &report, cli.decimals)
        }
        Job::Compare {
            strategy,
            puzzle,
            save,
        } => {
            let comparison = compare(&strategy, &DictionaryMatcher, &puzzle, &dictionary);
            print_comparison(&comparison, cli.decimals);
            if save {
                for report in [&comparison.left, &comparison.right] {
                    let path = save_csv(report, None).context("Failed to write CSV")?;
                    println!("Saved {}", path.display());
                }
            }
            Ok(())
        }
        Job::Benchmark { strategy, config } => {
            println!("Running benchmark on {} random puzzles...", config.count);
            let result = run_benchmark(&strategy, &DictionaryMatcher, &dictionary, &config)?;
            print_benchmark_result(&result, cli.decimals);
            Ok(())
        }
    }
}

fn finish_report(result: &SolveReport, args: &ReportArgs, decimals: usize) -> Result<()> {
    print_solve_report(result, args.show, decimals);

    if args.save {
        let path = save_csv(result, args.output.as_deref()).context("Failed to write CSV")?;
        println!("\nSaved {}", path.display());
    }
    Ok(())
}
