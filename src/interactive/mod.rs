//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, OUTCOME_DISPLAY, Screen, Statistics, run_tui};
