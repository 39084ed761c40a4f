//! Display functions for command results

use super::formatters::{combination_to_pegs, create_progress_bar, score_markers};
use crate::commands::{BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  {}",
        result.secret.to_string().bright_yellow().bold(),
        combination_to_pegs(&result.secret)
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nAttempt {}: {}  {}  {}",
            i + 1,
            combination_to_pegs(&step.guess),
            score_markers(step.score, length),
            step.guess.letters()
        );

        if verbose {
            println!("  Score:      {}", step.score);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} of {} attempts!",
                result.steps.len(),
                result.max_attempts
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} attempts", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if result.total_games > 0 {
        result.games_won as f64 / result.total_games as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Games won:        {} ({})",
        result.games_won,
        format!("{win_rate:.1}%").bright_yellow().bold()
    );
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_attempts).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_attempts).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rows: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&attempts, &count)| (attempts, count))
        .collect();
    rows.sort_unstable();

    for (attempt_count, count) in rows {
        let pct = count as f64 / result.total_games as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempt_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
