//! Command implementations

pub mod benchmark;
pub mod compare;
pub mod export;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use compare::{Comparison, compare};
pub use export::{default_file_name, save_csv, write_csv};
pub use solve::{SolveReport, solve_puzzle};
