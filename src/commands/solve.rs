//! Secret solving command
//!
//! Lets the solver play a real game against a known secret and records the
//! path it took.

use crate::core::{Combination, ExactMatches, GameConfig, GameEngine, GameError, GameState};
use crate::solver::{Solver, Strategy};
use rand::Rng;
use tracing::{debug, instrument};

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: Combination,
    pub max_attempts: usize,
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Combination,
    pub score: ExactMatches,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret using the given solver
///
/// # Errors
///
/// Returns an error if the secret cannot be played under `config` (wrong
/// length, repeated or foreign colors) or the configuration is invalid.
#[instrument(skip_all, fields(secret = %secret.letters()))]
pub fn solve_secret<S: Strategy>(
    secret: &Combination,
    config: &GameConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, GameError> {
    let mut engine = GameEngine::with_seed(config.clone(), 0)?;
    engine.start_with_secret(secret.clone())?;

    let steps = play_out(&mut engine, solver)?;

    Ok(SolveResult {
        success: engine.state() == GameState::Won,
        steps,
        secret: secret.clone(),
        max_attempts: config.max_attempts,
    })
}

/// Let the solver finish a game already in progress
///
/// Stops early if the solver has no consistent guess left.
///
/// # Errors
///
/// Returns an error if the engine refuses a guess, which only happens when
/// the game is not in progress or a partial guess is pending.
pub fn play_out<S: Strategy, R: Rng>(
    engine: &mut GameEngine<R>,
    solver: &Solver<S>,
) -> Result<Vec<GuessStep>, GameError> {
    let mut steps = Vec::new();

    while !engine.is_over() {
        let candidates_before = solver.count_candidates(engine.attempts());
        let Some(guess) = solver.next_guess(engine.attempts()) else {
            debug!("solver ran out of candidates");
            break;
        };

        let score = engine.submit_guess(&guess)?;
        let candidates_after = solver.count_candidates(engine.attempts());

        steps.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after,
        });
    }

    Ok(steps)
}
