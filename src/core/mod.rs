//! Core game types
//!
//! The engine and everything it is built from. Nothing here draws, reads
//! input or sleeps; presentation layers drive it through [`GameEngine`].

mod color;
mod combination;
mod config;
mod engine;
mod error;
mod score;

pub use color::Color;
pub use combination::Combination;
pub use config::GameConfig;
pub use engine::{Attempt, GameEngine, GameState};
pub use error::{ConfigError, GameError, Operation, ParseError};
pub use score::ExactMatches;
