//! Gomoku - terminal front end for the `strictly_gomoku` engine.
//!
//! # Architecture
//!
//! - **Engine** (`strictly_gomoku`): board, rules, turn state machine
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: ratatui renderer, keyboard/mouse input, status bar
//! - **Script**: headless play with plain-text output

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod script;
pub mod text;
pub mod tui;

pub use config::{ConfigError, GameConfig};
pub use script::run_script;
pub use text::{MoveParseError, TextRenderer, TextStatus, describe, parse_move};
pub use tui::run_tui;
