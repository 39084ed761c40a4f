//! Guess feedback
//!
//! Feedback is the number of exact positional matches between a guess and
//! the secret. Colors present in the secret at another position earn
//! nothing.

use std::fmt;

use super::{Color, Combination};

/// Number of positions where guess and secret hold the same color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExactMatches(u8);

impl ExactMatches {
    /// Create a score from a raw count
    #[inline]
    #[must_use]
    pub const fn new(count: u8) -> Self {
        Self(count)
    }

    /// Raw count
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether every one of `length` positions matched
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.0 as usize == length
    }

    /// Score `guess` against `secret`
    ///
    /// Walks the positions once. A matched position of the secret copy is
    /// marked consumed so it can never be counted a second time.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Combination, ExactMatches};
    ///
    /// let secret: Combination = "rbgy".parse().unwrap();
    /// let guess: Combination = "rgby".parse().unwrap();
    /// assert_eq!(ExactMatches::calculate(&guess, &secret).value(), 2);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Combination, secret: &Combination) -> Self {
        let mut remaining: Vec<Option<Color>> = secret.colors().iter().copied().map(Some).collect();
        let mut count = 0u8;

        for (peg, slot) in guess.colors().iter().zip(remaining.iter_mut()) {
            if *slot == Some(*peg) {
                count += 1;
                *slot = None;
            }
        }

        Self(count)
    }
}

impl fmt::Display for ExactMatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "1 exact match"),
            n => write!(f, "{n} exact matches"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Color::{Blue, Green, Red, Yellow};

    fn combo(s: &str) -> Combination {
        s.parse().unwrap()
    }

    #[test]
    fn swapped_middle_scores_two() {
        // Positions 0 and 3 line up, 1 and 2 are swapped
        let score = ExactMatches::calculate(&combo("rgby"), &combo("rbgy"));
        assert_eq!(score.value(), 2);
        assert!(!score.is_perfect(4));
    }

    #[test]
    fn identical_scores_perfect() {
        let secret = combo("rbgy");
        let score = ExactMatches::calculate(&secret, &secret);
        assert_eq!(score.value(), 4);
        assert!(score.is_perfect(4));
    }

    #[test]
    fn misplaced_colors_earn_nothing() {
        // Every color present, none in place
        let score = ExactMatches::calculate(&combo("yrbg"), &combo("rbgy"));
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn repeated_guess_color_counts_once_per_position() {
        let score = ExactMatches::calculate(&combo("rrrr"), &combo("rbgy"));
        assert_eq!(score.value(), 1);
    }

    #[test]
    fn display_pluralizes() {
        assert_eq!(ExactMatches::new(1).to_string(), "1 exact match");
        assert_eq!(ExactMatches::new(0).to_string(), "0 exact matches");
        assert_eq!(ExactMatches::new(3).to_string(), "3 exact matches");
    }

    fn color() -> impl Strategy<Value = Color> {
        prop::sample::select(vec![Red, Blue, Green, Yellow])
    }

    proptest! {
        #[test]
        fn prop_score_counts_equal_positions(
            guess in prop::collection::vec(color(), 4),
            secret in prop::sample::subsequence(vec![Red, Blue, Green, Yellow], 4)
                .prop_shuffle(),
        ) {
            let expected = guess.iter().zip(&secret).filter(|(g, s)| g == s).count();
            let score = ExactMatches::calculate(
                &Combination::new(guess),
                &Combination::new(secret),
            );

            prop_assert_eq!(score.value() as usize, expected);
            prop_assert!(score.value() <= 4);
        }
    }
}
