//! Game configuration

use rustc_hash::FxHashSet;

use super::{Color, ConfigError};

/// Parameters of a game
///
/// The defaults reproduce the classic setup: four colors, four pegs, ten
/// attempts. Call [`GameConfig::validate`] after overriding fields; the
/// engine refuses an invalid configuration at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Colors a secret is drawn from and a guess may use
    pub palette: Vec<Color>,
    /// Pegs per combination
    pub combination_length: usize,
    /// Guesses allowed before the game is lost
    pub max_attempts: usize,
}

impl GameConfig {
    pub const DEFAULT_PALETTE_SIZE: usize = 4;
    pub const DEFAULT_LENGTH: usize = 4;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

    /// Build a configuration using the first `palette_size` colors of [`Color::ALL`]
    ///
    /// # Errors
    /// Returns `ConfigError` if `palette_size` is outside `1..=8` or the
    /// resulting configuration fails [`GameConfig::validate`].
    pub fn new(
        palette_size: usize,
        combination_length: usize,
        max_attempts: usize,
    ) -> Result<Self, ConfigError> {
        if palette_size == 0 || palette_size > Color::ALL.len() {
            return Err(ConfigError::PaletteSizeOutOfRange {
                requested: palette_size,
                max: Color::ALL.len(),
            });
        }

        let config = Self {
            palette: Color::ALL[..palette_size].to_vec(),
            combination_length,
            max_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that distinct-color secrets can be drawn
    ///
    /// # Errors
    /// Returns the first problem found: an empty or repeating palette, a zero
    /// length or attempt limit, or a palette smaller than the combination.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let mut seen = FxHashSet::default();
        if let Some(&dup) = self.palette.iter().find(|c| !seen.insert(**c)) {
            return Err(ConfigError::DuplicateColor(dup));
        }

        if self.combination_length == 0 {
            return Err(ConfigError::ZeroLength);
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        if self.palette.len() < self.combination_length {
            return Err(ConfigError::PaletteTooSmall {
                palette: self.palette.len(),
                length: self.combination_length,
            });
        }

        Ok(())
    }

    /// Check whether a color belongs to the palette
    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.palette.contains(&color)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette: Color::ALL[..Self::DEFAULT_PALETTE_SIZE].to_vec(),
            combination_length: Self::DEFAULT_LENGTH,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_setup() {
        let config = GameConfig::default();
        assert_eq!(
            config.palette,
            vec![Color::Red, Color::Blue, Color::Green, Color::Yellow]
        );
        assert_eq!(config.combination_length, 4);
        assert_eq!(config.max_attempts, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_with_larger_palette() {
        let config = GameConfig::new(6, 4, 12).unwrap();
        assert_eq!(config.palette.len(), 6);
        assert!(config.contains(Color::Purple));
        assert!(!config.contains(Color::Cyan));
    }

    #[test]
    fn palette_size_out_of_range() {
        assert_eq!(
            GameConfig::new(9, 4, 10),
            Err(ConfigError::PaletteSizeOutOfRange {
                requested: 9,
                max: 8
            })
        );
        assert!(matches!(
            GameConfig::new(0, 4, 10),
            Err(ConfigError::PaletteSizeOutOfRange { .. })
        ));
    }

    #[test]
    fn palette_smaller_than_length() {
        assert_eq!(
            GameConfig::new(3, 4, 10),
            Err(ConfigError::PaletteTooSmall {
                palette: 3,
                length: 4
            })
        );
    }

    #[test]
    fn validate_catches_each_problem() {
        let mut config = GameConfig::default();
        config.palette.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPalette));

        let mut config = GameConfig::default();
        config.palette.push(Color::Blue);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateColor(Color::Blue))
        );

        let mut config = GameConfig::default();
        config.combination_length = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroLength));

        let mut config = GameConfig::default();
        config.max_attempts = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroAttempts));
    }
}
