//! Main solver interface

use super::strategy::Strategy;
use crate::core::{Attempt, Color, Combination, ExactMatches, GameConfig};

/// Largest palette^length for which every combination is kept as a guess
pub const GUESS_POOL_LIMIT: usize = 4096;

/// Automated code-breaker
///
/// Coordinates the solving process using a given strategy. The secret space
/// holds every arrangement of distinct palette colors; the guess pool also
/// admits repeated colors when it is small enough to enumerate.
pub struct Solver<S: Strategy> {
    strategy: S,
    guess_pool: Vec<Combination>,
    secrets: Vec<Combination>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver for games played with `config`
    #[must_use]
    pub fn new(strategy: S, config: &GameConfig) -> Self {
        let length = config.combination_length;
        let secrets = secret_space(&config.palette, length);

        let pool_size = u32::try_from(length)
            .ok()
            .and_then(|exp| config.palette.len().checked_pow(exp));
        let guess_pool = match pool_size {
            Some(size) if size <= GUESS_POOL_LIMIT => guess_space(&config.palette, length),
            _ => secrets.clone(),
        };

        Self {
            strategy,
            guess_pool,
            secrets,
        }
    }

    /// Get the next guess given the attempts so far
    ///
    /// Returns `None` if no secret is consistent with the history.
    #[must_use]
    pub fn next_guess(&self, history: &[Attempt]) -> Option<Combination> {
        let candidates = self.candidates(history);

        match candidates.as_slice() {
            [] => None,
            [only] => Some((*only).clone()),
            _ => self.strategy.select_guess(&self.guess_pool, &candidates),
        }
    }

    /// Secrets that would have produced every recorded score
    #[must_use]
    pub fn candidates(&self, history: &[Attempt]) -> Vec<&Combination> {
        self.secrets
            .iter()
            .filter(|&candidate| {
                history.iter().all(|attempt| {
                    ExactMatches::calculate(attempt.guess(), candidate) == attempt.score()
                })
            })
            .collect()
    }

    /// Count how many secrets remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[Attempt]) -> usize {
        self.candidates(history).len()
    }

    /// Number of combinations considered as guesses
    #[must_use]
    pub fn guess_pool_size(&self) -> usize {
        self.guess_pool.len()
    }
}

/// Every combination of `length` colors, repeats allowed, in palette order
fn guess_space(palette: &[Color], length: usize) -> Vec<Combination> {
    extend_rows(palette, length, |_, _| true)
}

/// Every arrangement of `length` distinct colors, in palette order
fn secret_space(palette: &[Color], length: usize) -> Vec<Combination> {
    extend_rows(palette, length, |row, color| !row.contains(&color))
}

fn extend_rows(
    palette: &[Color],
    length: usize,
    allowed: impl Fn(&[Color], Color) -> bool,
) -> Vec<Combination> {
    let mut rows: Vec<Vec<Color>> = vec![Vec::with_capacity(length)];

    for _ in 0..length {
        rows = rows
            .into_iter()
            .flat_map(|row| {
                palette
                    .iter()
                    .filter(|&&color| allowed(row.as_slice(), color))
                    .map(|&color| {
                        let mut next = row.clone();
                        next.push(color);
                        next
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
    }

    rows.into_iter().map(Combination::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameEngine, GameState};
    use crate::solver::strategy::{FirstCandidateStrategy, MinimaxStrategy};

    fn combo(s: &str) -> Combination {
        s.parse().unwrap()
    }

    fn scored(guess: &str, secret: &str) -> Attempt {
        let guess = combo(guess);
        let score = ExactMatches::calculate(&guess, &combo(secret));
        Attempt::new(guess, score)
    }

    #[test]
    fn default_spaces() {
        let solver = Solver::new(MinimaxStrategy, &GameConfig::default());
        // 4! arrangements, 4^4 guesses
        assert_eq!(solver.count_candidates(&[]), 24);
        assert_eq!(solver.guess_pool_size(), 256);
    }

    #[test]
    fn large_pool_falls_back_to_secrets() {
        let config = GameConfig::new(8, 5, 10).unwrap();
        let solver = Solver::new(FirstCandidateStrategy, &config);
        // 8^5 exceeds the limit; 8 * 7 * 6 * 5 * 4 arrangements
        assert_eq!(solver.count_candidates(&[]), 6720);
        assert_eq!(solver.guess_pool_size(), 6720);
    }

    #[test]
    fn secret_space_has_no_repeats() {
        let secrets = secret_space(&Color::ALL[..5], 3);
        assert_eq!(secrets.len(), 60);
        assert!(secrets.iter().all(Combination::has_distinct_colors));
    }

    #[test]
    fn candidates_consistent_with_history() {
        let solver = Solver::new(MinimaxStrategy, &GameConfig::default());
        let history = vec![scored("rgby", "rbgy"), scored("rrrr", "rbgy")];

        let candidates = solver.candidates(&history);
        assert!(candidates.contains(&&combo("rbgy")));
        for candidate in candidates {
            for attempt in &history {
                assert_eq!(
                    ExactMatches::calculate(attempt.guess(), candidate),
                    attempt.score()
                );
            }
        }
    }

    #[test]
    fn perfect_score_leaves_one_candidate() {
        let solver = Solver::new(MinimaxStrategy, &GameConfig::default());
        let history = vec![scored("ybgr", "ybgr")];

        assert_eq!(solver.count_candidates(&history), 1);
        assert_eq!(solver.next_guess(&history), Some(combo("ybgr")));
    }

    #[test]
    fn impossible_history_returns_none() {
        let solver = Solver::new(MinimaxStrategy, &GameConfig::default());
        // Three exact matches on a permutation force the fourth
        let history = vec![Attempt::new(combo("rbgy"), ExactMatches::new(3))];

        assert_eq!(solver.count_candidates(&history), 0);
        assert!(solver.next_guess(&history).is_none());
    }

    #[test]
    fn minimax_wins_every_default_game() {
        let config = GameConfig::default();
        let solver = Solver::new(MinimaxStrategy, &config);

        for secret in secret_space(&config.palette, config.combination_length) {
            let mut engine = GameEngine::with_seed(config.clone(), 0).unwrap();
            engine.start_with_secret(secret.clone()).unwrap();

            while !engine.is_over() {
                let guess = solver.next_guess(engine.attempts()).unwrap();
                engine.submit_guess(&guess).unwrap();
            }

            assert_eq!(engine.state(), GameState::Won, "failed on {secret}");
        }
    }
}
