//! Error types for the game engine

use thiserror::Error;

use super::{Color, GameState};

/// Engine operations that can be refused by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SubmitColor,
    SubmitGuess,
    RetractColor,
    RevealSecret,
}

impl Operation {
    const fn describe(self) -> &'static str {
        match self {
            Self::SubmitColor => "submit a color",
            Self::SubmitGuess => "submit a guess",
            Self::RetractColor => "retract a color",
            Self::RevealSecret => "reveal the secret",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.describe())
    }
}

/// Invalid game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("palette lists {0} more than once")]
    DuplicateColor(Color),
    #[error("palette size must be between 1 and {max}, got {requested}")]
    PaletteSizeOutOfRange { requested: usize, max: usize },
    #[error("combination length must be at least 1")]
    ZeroLength,
    #[error("attempt limit must be at least 1")]
    ZeroAttempts,
    #[error(
        "palette of {palette} colors cannot fill a combination of {length} distinct colors"
    )]
    PaletteTooSmall { palette: usize, length: usize },
}

/// Text that does not describe a color or a combination
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("combination is empty")]
    Empty,
}

/// Errors reported by [`GameEngine`](super::GameEngine)
///
/// All of these are caller contract violations; the engine state is left
/// untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {operation} while the game is {state}")]
    InvalidOperation {
        operation: Operation,
        state: GameState,
    },
    #[error(transparent)]
    Configuration(#[from] ConfigError),
    #[error("{0} is not in the palette")]
    ColorNotInPalette(Color),
    #[error("invalid guess: {0}")]
    InvalidGuess(String),
    #[error("invalid secret: {0}")]
    InvalidSecret(String),
}
