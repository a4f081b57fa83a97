//! Command-line interface for gomoku.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gomoku - five in a row for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row for two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a list of moves and print the board after each one
    Script {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Moves as ROW,COL (zero-based), Black first
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,
    },
}
