//! Mastermind - CLI
//!
//! Mastermind with TUI and CLI modes and an automated solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{run_benchmark, run_simple, solve_secret},
    core::{Combination, GameConfig, GameEngine},
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaking game with a terminal UI and an automated solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of palette colors (1-8)
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_PALETTE_SIZE)]
    colors: usize,

    /// Colors per combination
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_LENGTH)]
    length: usize,

    /// Attempts allowed before the game is lost
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Solver strategy: minimax (default) or first
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Let the solver crack a given secret
    Solve {
        /// The secret, as letters (rbgy) or names (red,blue,green,yellow)
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_deref())?;

    let config = GameConfig::new(cli.colors, cli.length, cli.max_attempts)
        .context("invalid game configuration")?;
    info!(
        colors = config.palette.len(),
        length = config.combination_length,
        max_attempts = config.max_attempts,
        strategy = %cli.strategy,
        "configuration loaded"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config, cli.seed, &cli.strategy),
        Commands::Simple => run_simple_command(config, cli.seed),
        Commands::Solve { secret, verbose } => {
            run_solve_command(&config, &cli.strategy, &secret, verbose)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&config, &cli.strategy, count, cli.seed)
        }
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default `warn` level. The TUI owns the terminal,
/// so logs go to `log_file` when one is given.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn new_engine(config: GameConfig, seed: Option<u64>) -> Result<GameEngine> {
    let engine = match seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };
    engine.context("cannot create game engine")
}

fn run_play_command(config: GameConfig, seed: Option<u64>, strategy_name: &str) -> Result<()> {
    use mastermind::interactive::{App, run_tui};

    let solver = Solver::new(StrategyType::from_name(strategy_name), &config);
    let engine = new_engine(config, seed)?;
    run_tui(App::new(engine, solver))
}

fn run_simple_command(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut engine = new_engine(config, seed)?;
    run_simple(&mut engine)
}

fn run_solve_command(
    config: &GameConfig,
    strategy_name: &str,
    secret: &str,
    verbose: bool,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let solver = Solver::new(strategy, config);
    solve_command(config, secret, verbose, &solver)
}

fn solve_command<S: Strategy>(
    config: &GameConfig,
    secret: &str,
    verbose: bool,
    solver: &Solver<S>,
) -> Result<()> {
    let secret: Combination = secret
        .parse()
        .with_context(|| format!("cannot parse secret '{secret}'"))?;
    let result = solve_secret(&secret, config, solver).context("cannot solve secret")?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    config: &GameConfig,
    strategy_name: &str,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Running benchmark on {count} games with the {} strategy...",
        strategy.name()
    );

    let solver = Solver::new(strategy, config);
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "benchmark seed");

    let result = run_benchmark(&solver, config, count, seed, true).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
