//! The game engine
//!
//! Owns the secret, the attempt history, the partial guess being entered and
//! the win/loss state machine. It performs no I/O; presentation layers feed
//! it colors and read its state back.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, info, instrument, trace};

use super::{Color, Combination, ExactMatches, GameConfig, GameError, Operation};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Won or Lost
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Combination,
    score: ExactMatches,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Combination, score: ExactMatches) -> Self {
        Self { guess, score }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Combination {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> ExactMatches {
        self.score
    }
}

/// Mastermind game engine
///
/// The engine instance is reused across games: [`GameEngine::start`] may be
/// called from any state and always begins a fresh game.
///
/// # Examples
/// ```
/// use mastermind::core::{Color, GameConfig, GameEngine, GameState};
///
/// let mut engine = GameEngine::with_seed(GameConfig::default(), 7).unwrap();
/// engine.start_with_secret("rbgy".parse().unwrap()).unwrap();
///
/// for color in [Color::Red, Color::Blue, Color::Green] {
///     assert_eq!(engine.submit_color(color).unwrap(), None);
/// }
/// let score = engine.submit_color(Color::Yellow).unwrap().unwrap();
/// assert_eq!(score.value(), 4);
/// assert_eq!(engine.state(), GameState::Won);
/// ```
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    rng: R,
    state: GameState,
    secret: Option<Combination>,
    attempts: Vec<Attempt>,
    pending: Vec<Color>,
}

impl GameEngine<StdRng> {
    /// Create an engine seeded from the operating system
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an engine whose secrets are reproducible from `seed`
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the configuration is invalid.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing secrets from `rng`
    ///
    /// # Errors
    /// Returns `GameError::Configuration` if the configuration is invalid.
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;

        Ok(Self {
            pending: Vec::with_capacity(config.combination_length),
            config,
            rng,
            state: GameState::NotStarted,
            secret: None,
            attempts: Vec::new(),
        })
    }

    /// Start a new game with a freshly drawn secret
    ///
    /// The secret is a uniform random arrangement of a uniform random subset
    /// of the palette, so it never repeats a color.
    #[instrument(skip(self), fields(palette = self.config.palette.len()))]
    pub fn start(&mut self) {
        let length = self.config.combination_length;
        let mut pool = self.config.palette.clone();
        let (drawn, _) = pool.partial_shuffle(&mut self.rng, length);
        let secret = Combination::new(drawn.to_vec());

        self.begin(secret);
    }

    /// Start a new game with a chosen secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the secret has the wrong length,
    /// repeats a color, or uses a color outside the palette. The current game
    /// is left untouched in that case.
    pub fn start_with_secret(&mut self, secret: Combination) -> Result<(), GameError> {
        if secret.len() != self.config.combination_length {
            return Err(GameError::InvalidSecret(format!(
                "expected {} colors, got {}",
                self.config.combination_length,
                secret.len()
            )));
        }

        if !secret.has_distinct_colors() {
            return Err(GameError::InvalidSecret(format!(
                "colors must be distinct: {secret}"
            )));
        }

        if let Some(&color) = secret.colors().iter().find(|c| !self.config.contains(**c)) {
            return Err(GameError::InvalidSecret(format!(
                "{color} is not in the palette"
            )));
        }

        self.begin(secret);
        Ok(())
    }

    fn begin(&mut self, secret: Combination) {
        trace!(secret = %secret, "secret drawn");
        self.secret = Some(secret);
        self.attempts.clear();
        self.pending.clear();
        self.state = GameState::InProgress;
        debug!(
            length = self.config.combination_length,
            max_attempts = self.config.max_attempts,
            "game started"
        );
    }

    /// Add one color to the guess being entered
    ///
    /// Returns the score once the color completes a guess, `None` while the
    /// guess is still partial.
    ///
    /// # Errors
    /// Returns `GameError::InvalidOperation` unless the game is in progress,
    /// and `GameError::ColorNotInPalette` for a color the game does not use.
    pub fn submit_color(&mut self, color: Color) -> Result<Option<ExactMatches>, GameError> {
        self.require_in_progress(Operation::SubmitColor)?;

        if !self.config.contains(color) {
            return Err(GameError::ColorNotInPalette(color));
        }

        self.pending.push(color);
        if self.pending.len() < self.config.combination_length {
            return Ok(None);
        }

        self.finalize_guess().map(Some)
    }

    /// Submit a complete guess at once
    ///
    /// Every color is checked before any is entered, so a rejected guess
    /// leaves the engine unchanged.
    ///
    /// # Errors
    /// Returns `GameError::InvalidOperation` unless the game is in progress,
    /// `GameError::InvalidGuess` if a partial guess is pending or the length
    /// is wrong, and `GameError::ColorNotInPalette` for a foreign color.
    pub fn submit_guess(&mut self, guess: &Combination) -> Result<ExactMatches, GameError> {
        self.require_in_progress(Operation::SubmitGuess)?;

        if !self.pending.is_empty() {
            return Err(GameError::InvalidGuess(format!(
                "{} colors already entered for the current guess",
                self.pending.len()
            )));
        }

        if guess.len() != self.config.combination_length {
            return Err(GameError::InvalidGuess(format!(
                "expected {} colors, got {}",
                self.config.combination_length,
                guess.len()
            )));
        }

        if let Some(&color) = guess.colors().iter().find(|c| !self.config.contains(**c)) {
            return Err(GameError::ColorNotInPalette(color));
        }

        self.pending.extend_from_slice(guess.colors());
        self.finalize_guess()
    }

    /// Remove the last color of the partial guess
    ///
    /// Scored attempts are never affected.
    ///
    /// # Errors
    /// Returns `GameError::InvalidOperation` unless the game is in progress.
    pub fn retract_color(&mut self) -> Result<Option<Color>, GameError> {
        self.require_in_progress(Operation::RetractColor)?;
        Ok(self.pending.pop())
    }

    fn finalize_guess(&mut self) -> Result<ExactMatches, GameError> {
        let Some(secret) = self.secret.as_ref() else {
            return Err(self.invalid(Operation::SubmitColor));
        };

        let guess = Combination::new(std::mem::take(&mut self.pending));
        let score = ExactMatches::calculate(&guess, secret);
        debug!(guess = %guess.letters(), score = score.value(), "guess scored");
        self.attempts.push(Attempt::new(guess, score));

        if score.is_perfect(self.config.combination_length) {
            self.state = GameState::Won;
            info!(attempts = self.attempts.len(), "game won");
        } else if self.attempts.len() == self.config.max_attempts {
            self.state = GameState::Lost;
            info!(attempts = self.attempts.len(), "game lost");
        }

        Ok(score)
    }

    fn require_in_progress(&self, operation: Operation) -> Result<(), GameError> {
        if self.state == GameState::InProgress {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: Operation) -> GameError {
        debug!(%operation, state = %self.state, "operation refused");
        GameError::InvalidOperation {
            operation,
            state: self.state,
        }
    }
}

impl<R> GameEngine<R> {
    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Scored attempts in submission order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Guesses left before the game is lost
    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts - self.attempts.len()
    }

    /// Colors entered so far for the next guess
    #[inline]
    #[must_use]
    pub fn pending_guess(&self) -> &[Color] {
        &self.pending
    }

    /// Whether the game has been won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The secret of a lost game
    ///
    /// # Errors
    /// Returns `GameError::InvalidOperation` in any state other than Lost.
    pub fn reveal_secret(&self) -> Result<&Combination, GameError> {
        match (self.state, self.secret.as_ref()) {
            (GameState::Lost, Some(secret)) => Ok(secret),
            (state, _) => Err(GameError::InvalidOperation {
                operation: Operation::RevealSecret,
                state,
            }),
        }
    }
}
