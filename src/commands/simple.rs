//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::{Color, Combination, GameEngine, GameState};
use crate::output::formatters::{combination_to_pegs, score_markers};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(engine: &mut GameEngine<R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(engine, stdin.lock(), stdout.lock())
}

/// Play games reading guesses line by line from `input`
///
/// A game already in progress is continued; otherwise a new one starts.
/// Returns when the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_lines<R: Rng, I: BufRead, O: Write>(
    engine: &mut GameEngine<R>,
    input: I,
    mut output: O,
) -> Result<()> {
    let mut lines = input.lines();
    print_intro(engine, &mut output)?;

    if engine.state() != GameState::InProgress {
        engine.start();
    }

    loop {
        if engine.is_over() {
            print_outcome(engine, &mut output)?;

            let Some(answer) = next_line(&mut lines, &mut output, "Play again? (yes/no)")? else {
                return Ok(());
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                engine.start();
                writeln!(output, "\n🔄 New game started!\n")?;
                continue;
            }
            writeln!(output, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        }

        let prompt = turn_prompt(engine);
        let Some(line) = next_line(&mut lines, &mut output, &prompt)? else {
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                engine.start();
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            _ => enter_colors(engine, &line, &mut output)?,
        }
    }
}

fn print_intro<R, O: Write>(engine: &GameEngine<R>, output: &mut O) -> Result<()> {
    let config = engine.config();
    let legend: Vec<String> = config
        .palette
        .iter()
        .map(|c| format!("{}={}", c.letter().to_ascii_uppercase(), c))
        .collect();

    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                   Mastermind - Simple Mode                   ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Find the {} distinct colors of the secret in {} attempts.",
        config.combination_length, config.max_attempts
    )?;
    writeln!(output, "Colors: {}", legend.join("  "))?;
    writeln!(
        output,
        "Type color letters (e.g. '{}'); each guess reports its exact matches.",
        palette_letters(&config.palette[..config.combination_length])
    )?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game\n")?;
    Ok(())
}

fn turn_prompt<R>(engine: &GameEngine<R>) -> String {
    let config = engine.config();
    let attempt = engine.attempts().len() + 1;
    let pending: String = engine.pending_guess().iter().map(|c| c.letter()).collect();

    if pending.is_empty() {
        format!("Attempt {attempt}/{}", config.max_attempts)
    } else {
        format!("Attempt {attempt}/{} [{pending}]", config.max_attempts)
    }
}

/// Validate a whole line before entering any of its colors
fn enter_colors<R: Rng, O: Write>(
    engine: &mut GameEngine<R>,
    line: &str,
    output: &mut O,
) -> Result<()> {
    let colors = match line.parse::<Combination>() {
        Ok(combination) => combination,
        Err(e) => {
            writeln!(output, "❌ {e}\n")?;
            return Ok(());
        }
    };

    if let Some(color) = colors
        .colors()
        .iter()
        .find(|c| !engine.config().contains(**c))
    {
        writeln!(output, "❌ {color} is not in this game's palette\n")?;
        return Ok(());
    }

    let open_slots = engine.config().combination_length - engine.pending_guess().len();
    if colors.len() > open_slots {
        writeln!(
            output,
            "❌ Too many colors: {open_slots} more needed for this guess\n"
        )?;
        return Ok(());
    }

    for &color in colors.colors() {
        if engine.submit_color(color)?.is_some() {
            report_attempt(engine, output)?;
        }
    }

    Ok(())
}

fn report_attempt<R, O: Write>(engine: &GameEngine<R>, output: &mut O) -> Result<()> {
    let length = engine.config().combination_length;
    if let Some(attempt) = engine.attempts().last() {
        writeln!(
            output,
            "  {}. {}  {}  {}.",
            engine.attempts().len(),
            combination_to_pegs(attempt.guess()),
            score_markers(attempt.score(), length),
            attempt.score()
        )?;
    }
    Ok(())
}

fn print_outcome<R, O: Write>(engine: &GameEngine<R>, output: &mut O) -> Result<()> {
    writeln!(output, "\n{}", "═".repeat(70).bright_cyan())?;

    match engine.state() {
        GameState::Won => {
            let attempts = engine.attempts().len();
            writeln!(
                output,
                "{}",
                "    🎉  Congratulations! You won!  🎉    ".bright_green().bold()
            )?;
            writeln!(
                output,
                "\n  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "attempt" } else { "attempts" }
            )?;
        }
        _ => {
            let secret = engine
                .reveal_secret()
                .context("finished game was not lost")?;
            writeln!(output, "{}", "    Game Over! You lost!    ".red().bold())?;
            writeln!(
                output,
                "\n  The correct combination was: {}  {}",
                secret.to_string().bright_yellow().bold(),
                combination_to_pegs(secret)
            )?;
        }
    }

    writeln!(output, "{}\n", "═".repeat(70).bright_cyan())?;
    Ok(())
}

/// Prompt and read one trimmed line, `None` at end of input
fn next_line<I: BufRead, O: Write>(
    lines: &mut io::Lines<I>,
    output: &mut O,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn palette_letters(palette: &[Color]) -> String {
    palette.iter().map(|c| c.letter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use std::io::Cursor;

    fn engine_with_secret(secret: &str) -> GameEngine {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 11).unwrap();
        engine.start_with_secret(secret.parse().unwrap()).unwrap();
        engine
    }

    fn play(engine: &mut GameEngine, input: &str) -> String {
        let mut output = Vec::new();
        play_lines(engine, Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn scores_then_wins() {
        let mut engine = engine_with_secret("rbgy");
        let output = play(&mut engine, "rgby\nrbgy\nno\n");

        assert!(output.contains("2 exact matches"));
        assert!(output.contains("Congratulations! You won!"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(engine.state(), GameState::Won);
        assert_eq!(engine.attempts().len(), 2);
    }

    #[test]
    fn colors_accumulate_across_lines() {
        let mut engine = engine_with_secret("rbgy");
        let output = play(&mut engine, "rb\ng\ny\n");

        assert!(output.contains("Attempt 1/10 [rb]"));
        assert!(output.contains("Attempt 1/10 [rbg]"));
        assert_eq!(engine.state(), GameState::Won);
    }

    #[test]
    fn loss_reveals_secret() {
        let mut engine = engine_with_secret("rbgy");
        let input = "rrrr\n".repeat(10) + "no\n";
        let output = play(&mut engine, &input);

        assert_eq!(engine.state(), GameState::Lost);
        assert!(output.contains("Game Over! You lost!"));
        assert!(output.contains("red, blue, green, yellow"));
    }

    #[test]
    fn invalid_lines_leave_game_untouched() {
        let mut engine = engine_with_secret("rbgy");
        let output = play(&mut engine, "rbgx\nrbgp\nrbgyr\nquit\n");

        assert!(output.contains("unknown color 'x'"));
        assert!(output.contains("purple is not in this game's palette"));
        assert!(output.contains("Too many colors"));
        assert!(engine.attempts().is_empty());
        assert!(engine.pending_guess().is_empty());
    }

    #[test]
    fn new_command_restarts() {
        let mut engine = engine_with_secret("rbgy");
        let output = play(&mut engine, "rrrr\nnew\n");

        assert!(output.contains("New game started"));
        assert!(engine.attempts().is_empty());
        assert_eq!(engine.state(), GameState::InProgress);
    }

    #[test]
    fn play_again_starts_fresh_game() {
        let mut engine = engine_with_secret("rbgy");
        let output = play(&mut engine, "rbgy\nyes\n");

        assert!(output.contains("New game started"));
        assert_eq!(engine.state(), GameState::InProgress);
        assert!(engine.attempts().is_empty());
    }

    #[test]
    fn starts_a_game_when_none_is_running() {
        let mut engine = GameEngine::with_seed(GameConfig::default(), 2).unwrap();
        play(&mut engine, "");
        assert_eq!(engine.state(), GameState::InProgress);
    }

    #[test]
    fn palette_letters_lists_keys() {
        assert_eq!(palette_letters(&GameConfig::default().palette), "rbgy");
    }
}
