//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{play_lines, run_simple};
pub use solve::{GuessStep, SolveResult, play_out, solve_secret};
