//! Mastermind
//!
//! A Mastermind code-breaking game: a UI-agnostic engine, an automated
//! solver, and terminal front ends built on top of them.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Combination, ExactMatches, GameConfig, GameEngine, GameState};
//!
//! let mut engine = GameEngine::with_seed(GameConfig::default(), 42).unwrap();
//! engine.start_with_secret("rbgy".parse().unwrap()).unwrap();
//!
//! let guess: Combination = "rgby".parse().unwrap();
//! assert_eq!(engine.submit_guess(&guess).unwrap(), ExactMatches::new(2));
//! assert_eq!(engine.state(), GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
