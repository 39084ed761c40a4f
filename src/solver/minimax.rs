//! Minimax guess selection
//!
//! Picks the guess whose largest group of candidates sharing one score is
//! the smallest, so the worst feedback still narrows the search the most.

use crate::core::{Combination, ExactMatches};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Pool size × candidate count above which only candidates are considered
pub const EVALUATION_BUDGET: usize = 4_000_000;

/// Size of the largest candidate group `guess` can leave behind
///
/// Candidates are grouped by the score `guess` would receive against each.
///
/// # Examples
/// ```
/// use mastermind::core::Combination;
/// use mastermind::solver::minimax::max_partition;
///
/// let guess: Combination = "rbgy".parse().unwrap();
/// let candidates: Vec<Combination> = ["rbgy", "rbyg", "brgy"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let refs: Vec<&Combination> = candidates.iter().collect();
///
/// // Scores 4, 2, 2
/// assert_eq!(max_partition(&guess, &refs), 2);
/// ```
#[must_use]
pub fn max_partition(guess: &Combination, candidates: &[&Combination]) -> usize {
    let mut counts = vec![0usize; guess.len() + 1];
    for &candidate in candidates {
        let score = ExactMatches::calculate(guess, candidate);
        counts[usize::from(score.value())] += 1;
    }
    counts.into_iter().max().unwrap_or(0)
}

/// Select the guess minimizing the worst-case remaining candidates
///
/// Ties go to guesses that could themselves be the secret, then to the
/// earliest entry of the pool. Returns the guess and its worst case, or
/// `None` if the pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Combination],
    candidates: &[&Combination],
) -> Option<(&'a Combination, usize)> {
    let candidate_set: FxHashSet<&Combination> = candidates.iter().copied().collect();

    guess_pool
        .par_iter()
        .map(|guess| {
            let worst = max_partition(guess, candidates);
            (guess, (worst, !candidate_set.contains(guess)))
        })
        .min_by_key(|(_, key)| *key)
        .map(|(guess, (worst, _))| (guess, worst))
}
