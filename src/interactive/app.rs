//! TUI application state and logic

use crate::core::{Color, Combination, GameEngine, GameState};
use crate::solver::{Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long the win/loss banner stays up before returning to the menu
pub const OUTCOME_DISPLAY: Duration = Duration::from_secs(3);

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub solver: Solver<StrategyType>,
    pub screen: Screen,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub hint: Option<Combination>,
    pub should_quit: bool,
    pub outcome_display: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    /// Win/loss banner, shown until `until` passes or a key is pressed
    Outcome { state: GameState, until: Instant },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Won games indexed by attempts used
    pub attempt_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, state: GameState, attempts: usize) {
        self.total_games += 1;
        if state == GameState::Won {
            self.games_won += 1;
            if self.attempt_distribution.len() <= attempts {
                self.attempt_distribution.resize(attempts + 1, 0);
            }
            self.attempt_distribution[attempts] += 1;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine, solver: Solver<StrategyType>) -> Self {
        Self {
            engine,
            solver,
            screen: Screen::Menu,
            messages: vec![Message {
                text: "Welcome! Press SPACE to start a game.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            hint: None,
            should_quit: false,
            outcome_display: OUTCOME_DISPLAY,
        }
    }

    pub fn start_game(&mut self) {
        self.engine.start();
        self.hint = None;
        self.screen = Screen::Playing;
        self.messages.clear();
        self.add_message(
            "New game started! Type color keys to build a guess.",
            MessageStyle::Info,
        );
    }

    pub fn submit_color(&mut self, color: Color, now: Instant) {
        match self.engine.submit_color(color) {
            Ok(Some(score)) => {
                self.hint = None;
                if let Some(attempt) = self.engine.attempts().last() {
                    let text = format!("{}: {score}", attempt.guess().letters());
                    self.add_message(&text, MessageStyle::Info);
                }
                if self.engine.is_over() {
                    self.finish(now);
                }
            }
            Ok(None) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn retract(&mut self) {
        match self.engine.retract_color() {
            Ok(Some(_)) => {}
            Ok(None) => self.add_message("Nothing to retract!", MessageStyle::Error),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Ask the solver for the next guess
    pub fn show_hint(&mut self) {
        if let Some(guess) = self.solver.next_guess(self.engine.attempts()) {
            debug!(hint = %guess.letters(), "hint computed");
            let remaining = self.solver.count_candidates(self.engine.attempts());
            self.add_message(
                &format!("Hint: {guess} ({remaining} candidates remain)"),
                MessageStyle::Success,
            );
            self.hint = Some(guess);
        } else {
            self.add_message("No consistent combination remains!", MessageStyle::Error);
        }
    }

    fn finish(&mut self, now: Instant) {
        let state = self.engine.state();
        let attempts = self.engine.attempts().len();
        self.stats.record(state, attempts);
        info!(%state, attempts, "game finished");

        self.screen = Screen::Outcome {
            state,
            until: now + self.outcome_display,
        };
    }

    fn return_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.add_message("Press SPACE to play again.", MessageStyle::Info);
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Char(' ') => self.start_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => {
                    self.screen = Screen::Menu;
                    self.add_message("Game abandoned.", MessageStyle::Info);
                }
                KeyCode::Backspace => self.retract(),
                KeyCode::Char('?') => self.show_hint(),
                KeyCode::Char(c) => match Color::from_letter(c) {
                    Some(color) => self.submit_color(color, now),
                    None => {
                        self.add_message(&format!("'{c}' is not a color key"), MessageStyle::Error);
                    }
                },
                _ => {}
            },
            Screen::Outcome { .. } => self.return_to_menu(),
        }
    }

    /// Advance time-driven state
    pub fn tick(&mut self, now: Instant) {
        if let Screen::Outcome { until, .. } = self.screen
            && now >= until
        {
            self.return_to_menu();
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
