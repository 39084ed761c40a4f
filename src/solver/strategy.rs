//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::{self, EVALUATION_BUDGET};
use crate::core::Combination;

/// A strategy for picking the next guess
pub trait Strategy {
    /// Select a guess from the pool given the secrets still possible
    ///
    /// Returns `None` if nothing can be proposed.
    fn select_guess(
        &self,
        guess_pool: &[Combination],
        candidates: &[&Combination],
    ) -> Option<Combination>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Worst-case minimization (default)
    Minimax(MinimaxStrategy),
    /// First consistent candidate
    FirstCandidate(FirstCandidateStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(
        &self,
        guess_pool: &[Combination],
        candidates: &[&Combination],
    ) -> Option<Combination> {
        match self {
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::FirstCandidate(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first". Defaults to minimax if the name
    /// is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" | "first-candidate" | "naive" => Self::FirstCandidate(FirstCandidateStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::FirstCandidate(_) => "first",
        }
    }
}

/// Minimax strategy
///
/// Minimizes the worst-case number of remaining candidates. When the full
/// pool is too large to evaluate against every candidate, only candidates
/// are considered as guesses, and past that the first candidate is played.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(
        &self,
        guess_pool: &[Combination],
        candidates: &[&Combination],
    ) -> Option<Combination> {
        let within_budget = |pool: usize| pool.saturating_mul(candidates.len()) <= EVALUATION_BUDGET;

        if within_budget(guess_pool.len()) {
            return minimax::select_best_guess(guess_pool, candidates).map(|(g, _)| g.clone());
        }

        if within_budget(candidates.len()) {
            let narrowed: Vec<Combination> = candidates.iter().map(|&c| c.clone()).collect();
            return minimax::select_best_guess(&narrowed, candidates).map(|(g, _)| g.clone());
        }

        FirstCandidateStrategy.select_guess(guess_pool, candidates)
    }
}

/// Plays the first secret still consistent with the feedback
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess(
        &self,
        _guess_pool: &[Combination],
        candidates: &[&Combination],
    ) -> Option<Combination> {
        candidates.first().map(|&c| c.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos(items: &[&str]) -> Vec<Combination> {
        items.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn from_name_selects_strategy() {
        assert_eq!(StrategyType::from_name("first").name(), "first");
        assert_eq!(StrategyType::from_name("minimax").name(), "minimax");
        assert_eq!(StrategyType::from_name("unknown").name(), "minimax");
    }

    #[test]
    fn first_candidate_ignores_pool() {
        let pool = combos(&["rrrr"]);
        let candidates = combos(&["bgyr", "rbgy"]);
        let refs: Vec<&Combination> = candidates.iter().collect();

        let guess = FirstCandidateStrategy.select_guess(&pool, &refs).unwrap();
        assert_eq!(guess.letters(), "bgyr");
    }

    #[test]
    fn strategies_return_none_without_candidates() {
        let pool = combos(&["rbgy"]);
        assert!(FirstCandidateStrategy.select_guess(&pool, &[]).is_none());
        assert!(StrategyType::from_name("first").select_guess(&pool, &[]).is_none());
    }

    #[test]
    fn minimax_uses_pool() {
        let pool = combos(&["rrrr", "rbgy"]);
        let candidates = combos(&["rbgy", "rbyg", "brgy", "bryg"]);
        let refs: Vec<&Combination> = candidates.iter().collect();

        let guess = MinimaxStrategy.select_guess(&pool, &refs).unwrap();
        assert_eq!(guess.letters(), "rbgy");
    }
}
