//! Benchmark command
//!
//! Plays many seeded games with the solver and summarizes how it did.

use super::solve::play_out;
use crate::core::{GameConfig, GameEngine, GameError, GameState};
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub games_won: usize,
    pub total_attempts: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    /// Winning games keyed by attempts used
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `games` games whose secrets come from seeds `seed`, `seed + 1`, ...
///
/// Games run in parallel; each has its own engine while the solver is shared.
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn run_benchmark<S: Strategy + Sync>(
    solver: &Solver<S>,
    config: &GameConfig,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let outcomes = (0..games)
        .into_par_iter()
        .map(|i| -> Result<(bool, usize), GameError> {
            let mut engine = GameEngine::with_seed(config.clone(), seed.wrapping_add(i as u64))?;
            engine.start();
            play_out(&mut engine, solver)?;
            pb.inc(1);
            Ok((engine.state() == GameState::Won, engine.attempts().len()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let won: Vec<usize> = outcomes
        .iter()
        .filter(|(won, _)| *won)
        .map(|&(_, attempts)| attempts)
        .collect();
    for &attempts in &won {
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    let total_attempts: usize = won.iter().sum();
    let games_won = won.len();
    let average_attempts = if games_won > 0 {
        total_attempts as f64 / games_won as f64
    } else {
        0.0
    };

    info!(
        games,
        games_won,
        elapsed_ms = duration.as_millis() as u64,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        total_games: games,
        games_won,
        total_attempts,
        average_attempts,
        min_attempts: won.iter().copied().min().unwrap_or(0),
        max_attempts: won.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, MinimaxStrategy};

    #[test]
    fn benchmark_runs() {
        let config = GameConfig::default();
        let solver = Solver::new(MinimaxStrategy, &config);
        let result = run_benchmark(&solver, &config, 20, 7, false).unwrap();

        assert_eq!(result.total_games, 20);
        assert_eq!(result.games_won, 20);
        assert!(result.min_attempts >= 1);
        assert!(result.max_attempts <= 10);
        assert!(result.average_attempts >= result.min_attempts as f64);
        assert!(result.average_attempts <= result.max_attempts as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = GameConfig::default();
        let solver = Solver::new(FirstCandidateStrategy, &config);
        let result = run_benchmark(&solver, &config, 30, 0, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.games_won);
        for &attempts in result.distribution.keys() {
            assert!((1..=10).contains(&attempts));
        }
    }

    #[test]
    fn benchmark_is_reproducible() {
        let config = GameConfig::default();
        let solver = Solver::new(FirstCandidateStrategy, &config);
        let a = run_benchmark(&solver, &config, 15, 123, false).unwrap();
        let b = run_benchmark(&solver, &config, 15, 123, false).unwrap();

        assert_eq!(a.total_attempts, b.total_attempts);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_no_games() {
        let config = GameConfig::default();
        let solver = Solver::new(MinimaxStrategy, &config);
        let result = run_benchmark(&solver, &config, 0, 0, false).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.games_won, 0);
        assert_eq!(result.min_attempts, 0);
        assert!(result.average_attempts.abs() < f64::EPSILON);
    }
}
