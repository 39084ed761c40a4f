//! TUI rendering with ratatui
//!
//! Menu, board and outcome views for the game.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Color, GameState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

const PEG: &str = "●";
const EMPTY_SLOT: &str = "○";

/// Terminal color used to paint a peg
const fn peg_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
        Color::Orange => TermColor::Rgb(255, 140, 0),
        Color::Purple => TermColor::Rgb(160, 32, 240),
        Color::Cyan => TermColor::Cyan,
        Color::Magenta => TermColor::Magenta,
    }
}

fn peg_spans(colors: &[Color], length: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(length * 2);
    for slot in 0..length {
        match colors.get(slot) {
            Some(&color) => spans.push(Span::styled(PEG, Style::default().fg(peg_color(color)))),
            None => spans.push(Span::styled(
                EMPTY_SLOT,
                Style::default().fg(TermColor::DarkGray),
            )),
        }
        spans.push(Span::raw(" "));
    }
    spans
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.screen {
        Screen::Menu => render_menu(f, app, chunks[1]),
        Screen::Playing | Screen::Outcome { .. } => {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(60), // Board
                    Constraint::Percentage(40), // Side panel
                ])
                .split(chunks[1]);

            render_board(f, app, main_chunks[0]);
            render_info_panel(f, app, main_chunks[1]);

            if let Screen::Outcome { state, .. } = app.screen {
                render_outcome(f, app, state, chunks[1]);
            }
        }
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND")
        .style(
            Style::default()
                .fg(TermColor::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(TermColor::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let config = app.engine.config();
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Crack the secret combination!",
            Style::default()
                .fg(TermColor::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "The secret holds {} distinct colors. You have {} attempts.",
            config.combination_length, config.max_attempts
        )),
        Line::from("Each guess tells you how many colors sit in the right place."),
        Line::from(""),
        Line::from(Span::styled(
            "Press SPACE to start, q to quit",
            Style::default().fg(TermColor::Green),
        )),
        Line::from(""),
    ];

    if let Some(last) = app.messages.last() {
        content.push(Line::from(Span::styled(
            last.text.clone(),
            message_style(last.style),
        )));
    }

    let menu = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Menu ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(menu, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.engine.config().combination_length;
    let mut items: Vec<ListItem> = app
        .engine
        .attempts()
        .iter()
        .enumerate()
        .map(|(i, attempt)| {
            let mut spans = vec![Span::raw(format!("{:2}. ", i + 1))];
            spans.extend(peg_spans(attempt.guess().colors(), length));

            let hits = usize::from(attempt.score().value()).min(length);
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                "■".repeat(hits),
                Style::default().fg(TermColor::Green),
            ));
            spans.push(Span::styled(
                "□".repeat(length - hits),
                Style::default().fg(TermColor::DarkGray),
            ));
            spans.push(Span::raw(format!("  {}", attempt.score())));
            ListItem::new(Line::from(spans))
        })
        .collect();

    if app.engine.state() == GameState::InProgress {
        let mut spans = vec![Span::styled(
            format!("{:2}. ", app.engine.attempts().len() + 1),
            Style::default().fg(TermColor::Yellow),
        )];
        spans.extend(peg_spans(app.engine.pending_guess(), length));
        items.push(ListItem::new(Line::from(spans)));
    }

    if let Some(hint) = &app.hint {
        let mut spans = vec![Span::styled(
            "Hint ",
            Style::default().fg(TermColor::Cyan),
        )];
        spans.extend(peg_spans(hint.colors(), length));
        spans.push(Span::raw(hint.letters()));
        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(spans)));
    }

    let board = List::new(items).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(4),    // Palette legend
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_legend(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let max = app.engine.config().max_attempts;
    let remaining = app.engine.remaining_attempts();
    let ratio = if max == 0 {
        0.0
    } else {
        remaining as f64 / max as f64
    };

    let color = match ratio {
        r if r > 0.5 => TermColor::Green,
        r if r > 0.2 => TermColor::Yellow,
        _ => TermColor::Red,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{max}"));

    f.render_widget(gauge, area);
}

fn render_legend(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .engine
        .config()
        .palette
        .iter()
        .map(|&color| {
            Line::from(vec![
                Span::styled(PEG, Style::default().fg(peg_color(color))),
                Span::raw(" "),
                Span::styled(
                    color.letter().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {color}")),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL),
    );
    f.render_widget(legend, area);
}

fn message_style(style: MessageStyle) -> Style {
    match style {
        MessageStyle::Info => Style::default().fg(TermColor::White),
        MessageStyle::Success => Style::default().fg(TermColor::Green),
        MessageStyle::Error => Style::default().fg(TermColor::Red),
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| ListItem::new(msg.text.clone()).style(message_style(msg.style)))
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_outcome(f: &mut Frame, app: &App, state: GameState, area: Rect) {
    let length = app.engine.config().combination_length;
    let (title, color, mut lines) = if state == GameState::Won {
        let attempts = app.engine.attempts().len();
        (
            " 🎉 CONGRATULATIONS! 🎉 ",
            TermColor::Green,
            vec![Line::from(format!(
                "You cracked it in {attempts} {}!",
                if attempts == 1 { "attempt" } else { "attempts" }
            ))],
        )
    } else {
        let mut lines = vec![Line::from("Game over! The correct combination was:")];
        if let Ok(secret) = app.engine.reveal_secret() {
            let mut spans = peg_spans(secret.colors(), length);
            spans.push(Span::raw(secret.to_string()));
            lines.push(Line::from(spans));
        }
        (" GAME OVER ", TermColor::Red, lines)
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to continue",
        Style::default().fg(TermColor::DarkGray),
    )));

    let popup = centered_rect(area, 60, 7);
    let banner = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(banner, popup);
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = u32::from(area.width) * u32::from(percent_x.min(100)) / 100;
    let width = u16::try_from(width).unwrap_or(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = match app.screen {
        Screen::Menu => "Mode: Menu",
        Screen::Playing => "Mode: Playing",
        Screen::Outcome { .. } => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.screen {
        Screen::Menu => "SPACE: Play | q: Quit",
        Screen::Playing => "Keys: Color | ⌫: Undo | ?: Hint | Esc: Menu | q: Quit",
        Screen::Outcome { .. } => "Any key: Menu",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(TermColor::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameEngine};
    use crate::solver::{Solver, StrategyType};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn app() -> App {
        let config = GameConfig::default();
        let engine = GameEngine::with_seed(config.clone(), 1).unwrap();
        App::new(engine, Solver::new(StrategyType::from_name("first"), &config))
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn menu_renders() {
        let screen = draw(&app());
        assert!(screen.contains("Press SPACE to start"));
    }

    #[test]
    fn loss_banner_reveals_secret() {
        let mut app = app();
        app.start_game();
        app.engine.start_with_secret("rbgy".parse().unwrap()).unwrap();
        let now = Instant::now();
        for _ in 0..10 {
            for c in [Color::Red; 4] {
                app.submit_color(c, now);
            }
        }

        let screen = draw(&app);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("red, blue, green, yellow"));
    }

    #[test]
    fn board_shows_attempts_left() {
        let mut app = app();
        app.start_game();
        app.submit_color(Color::Red, Instant::now());

        let screen = draw(&app);
        assert!(screen.contains("10/10"));
        assert!(screen.contains("Attempts Left"));
    }

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 5);
        let popup = centered_rect(area, 60, 7);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 5);
        assert_eq!(popup.x, 20);
    }

    #[test]
    fn centered_rect_on_wide_terminal() {
        let area = Rect::new(0, 0, 1200, 40);
        let popup = centered_rect(area, 60, 7);
        assert_eq!(popup.width, 720);
        assert_eq!(popup.x, 240);
        assert_eq!(popup.y, 16);

        let full = centered_rect(Rect::new(0, 0, u16::MAX, 10), 100, 7);
        assert_eq!(full.width, u16::MAX);
        assert_eq!(full.x, 0);
    }
}
