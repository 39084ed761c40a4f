//! Peg colors
//!
//! Every color has a lowercase name and a single key letter used for input.

use std::fmt;
use std::str::FromStr;

use super::ParseError;

/// A peg color
///
/// Colors carry no ordering beyond identity. A game plays with a palette
/// drawn from [`Color::ALL`], by default the first four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
    Cyan,
    Magenta,
}

impl Color {
    /// Every color the game knows about, in palette order
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Yellow,
        Self::Orange,
        Self::Purple,
        Self::Cyan,
        Self::Magenta,
    ];

    /// Lowercase color name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
        }
    }

    /// Key letter used to enter this color
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Blue => 'b',
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Orange => 'o',
            Self::Purple => 'p',
            Self::Cyan => 'c',
            Self::Magenta => 'm',
        }
    }

    /// Look up a color by key letter (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_letter('R'), Some(Color::Red));
    /// assert_eq!(Color::from_letter('x'), None);
    /// ```
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.letter() == letter)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    /// Accepts a full name (`"green"`) or a key letter (`"g"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let mut chars = trimmed.chars();

        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return Self::from_letter(letter).ok_or_else(|| ParseError::UnknownColor(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|c| c.name() == trimmed)
            .ok_or_else(|| ParseError::UnknownColor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn letters_are_unique() {
        let letters: FxHashSet<char> = Color::ALL.iter().map(|c| c.letter()).collect();
        assert_eq!(letters.len(), Color::ALL.len());
    }

    #[test]
    fn letter_round_trips_for_every_color() {
        for color in Color::ALL {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
            assert_eq!(
                Color::from_letter(color.letter().to_ascii_uppercase()),
                Some(color)
            );
        }
    }

    #[test]
    fn parse_names_and_letters() {
        assert_eq!("green".parse::<Color>().unwrap(), Color::Green);
        assert_eq!(" Yellow ".parse::<Color>().unwrap(), Color::Yellow);
        assert_eq!("m".parse::<Color>().unwrap(), Color::Magenta);
    }

    #[test]
    fn parse_unknown_color() {
        assert!(matches!(
            "teal".parse::<Color>(),
            Err(ParseError::UnknownColor(_))
        ));
        assert!("x".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Color::Purple.to_string(), "purple");
    }
}
