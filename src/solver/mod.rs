//! Automated code-breaking
//!
//! Narrows the secret space using recorded feedback and proposes guesses.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::{GUESS_POOL_LIMIT, Solver};
pub use strategy::{FirstCandidateStrategy, MinimaxStrategy, Strategy, StrategyType};
