//! Gomoku - unified CLI.

use anyhow::{Context, Result};
use clap::Parser;
use gomoku::cli::{Cli, Command};
use gomoku::{GameConfig, TextRenderer, TextStatus, run_script, run_tui};
use std::path::PathBuf;
use strictly_gomoku::{GameController, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { size, config } => {
            let config = load_config(config, size)?;
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Script {
            size,
            config,
            moves,
        } => {
            let config = load_config(config, size)?;
            init_stderr_logging(&config);
            play_script(&config, &moves)
        }
    }
}

fn load_config(path: Option<PathBuf>, size: Option<usize>) -> Result<GameConfig> {
    let config = GameConfig::load(path.as_deref())
        .context("Failed to load configuration")?
        .with_board_size(size)
        .context("Invalid board size")?;
    Ok(config)
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file so they do not tear up the terminal UI.
fn init_file_logging(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging(config: &GameConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}

fn play_script(config: &GameConfig, moves: &[String]) -> Result<()> {
    let mut session = Session::new(
        GameController::with_size(*config.board_size()),
        TextRenderer::new(std::io::stdout()),
        TextStatus::new(std::io::stdout()),
    );
    let status = run_script(&mut session, moves, &mut std::io::stdout())?;
    info!(?status, "Done");
    Ok(())
}
