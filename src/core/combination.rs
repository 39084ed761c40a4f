//! Color combinations
//!
//! A Combination is an ordered row of pegs. Guesses may repeat colors;
//! secrets may not, which [`Combination::has_distinct_colors`] checks.

use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

use super::{Color, ParseError};

/// An ordered sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination(Vec<Color>);

impl Combination {
    /// Create a combination from colors in order
    #[must_use]
    pub const fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Colors in position order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that no color appears twice
    #[must_use]
    pub fn has_distinct_colors(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.0.iter().all(|color| seen.insert(*color))
    }

    /// Key letters, e.g. `"rbgy"`
    #[must_use]
    pub fn letters(&self) -> String {
        self.0.iter().map(|c| c.letter()).collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl FromStr for Combination {
    type Err = ParseError;

    /// Parse key letters (`"rbgy"`) or separated names (`"red, blue green"`)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color, Combination};
    ///
    /// let a: Combination = "RBGY".parse().unwrap();
    /// let b: Combination = "red, blue, green, yellow".parse().unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a.colors()[2], Color::Green);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let colors = match tokens.as_slice() {
            [] => return Err(ParseError::Empty),
            // A single token is either one color name or a run of key letters
            [token] if token.parse::<Color>().is_err() => token
                .chars()
                .map(|ch| {
                    Color::from_letter(ch).ok_or_else(|| ParseError::UnknownColor(ch.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => tokens
                .iter()
                .map(|t| t.parse::<Color>())
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Blue, Green, Red, Yellow};

    #[test]
    fn parse_letters() {
        let combo: Combination = "rbgy".parse().unwrap();
        assert_eq!(combo.colors(), &[Red, Blue, Green, Yellow]);
    }

    #[test]
    fn parse_letters_with_repeats() {
        let combo: Combination = "RRGG".parse().unwrap();
        assert_eq!(combo.colors(), &[Red, Red, Green, Green]);
        assert!(!combo.has_distinct_colors());
    }

    #[test]
    fn parse_names() {
        let combo: Combination = "yellow green, blue,red".parse().unwrap();
        assert_eq!(combo.colors(), &[Yellow, Green, Blue, Red]);
    }

    #[test]
    fn parse_single_name() {
        let combo: Combination = "purple".parse().unwrap();
        assert_eq!(combo.colors(), &[Color::Purple]);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "rbgx".parse::<Combination>(),
            Err(ParseError::UnknownColor(ref s)) if s == "x"
        ));
        assert!(matches!(
            "red, teal".parse::<Combination>(),
            Err(ParseError::UnknownColor(_))
        ));
        assert_eq!("  ".parse::<Combination>(), Err(ParseError::Empty));
    }

    #[test]
    fn distinct_colors() {
        assert!(Combination::new(vec![Red, Blue, Green, Yellow]).has_distinct_colors());
        assert!(!Combination::new(vec![Red, Blue, Red, Yellow]).has_distinct_colors());
    }

    #[test]
    fn display_joins_names() {
        let combo = Combination::new(vec![Red, Blue, Green, Yellow]);
        assert_eq!(combo.to_string(), "red, blue, green, yellow");
        assert_eq!(combo.letters(), "rbgy");
    }
}
