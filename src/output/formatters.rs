//! Formatting utilities for terminal output

use crate::core::{Color, Combination, ExactMatches};
use colored::Colorize;

/// Terminal color used to paint a peg
#[must_use]
pub const fn peg_color(color: Color) -> colored::Color {
    match color {
        Color::Red => colored::Color::Red,
        Color::Blue => colored::Color::Blue,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Orange => colored::Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Color::Purple => colored::Color::TrueColor {
            r: 160,
            g: 32,
            b: 240,
        },
        Color::Cyan => colored::Color::Cyan,
        Color::Magenta => colored::Color::Magenta,
    }
}

/// Render a combination as a row of colored pegs
#[must_use]
pub fn combination_to_pegs(combination: &Combination) -> String {
    combination
        .colors()
        .iter()
        .map(|&c| "●".color(peg_color(c)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a score as filled and empty markers, one per position
#[must_use]
pub fn score_markers(score: ExactMatches, length: usize) -> String {
    let hits = usize::from(score.value()).min(length);
    format!("{}{}", "■".repeat(hits), "□".repeat(length - hits))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
