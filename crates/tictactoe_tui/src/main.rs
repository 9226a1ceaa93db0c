//! Tic-tac-toe - terminal front-end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tictactoe_core::{GameBoard, Minimax};
use tictactoe_tui::cli::{Cli, Command};
use tictactoe_tui::{GameConfig, GameMode, Session, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            player_x,
            player_o,
            config,
        } => run_play(config, mode, player_x, player_o),
        Command::Suggest { board } => run_suggest(&board),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the terminal game
fn run_play(
    config_path: PathBuf,
    mode: Option<GameMode>,
    player_x: Option<String>,
    player_o: Option<String>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?.with_overrides(mode, player_x, player_o);

    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = %config_path.display(), mode = %config.mode(), "Starting tictactoe");
    tui::run(Session::new(&config))
}

/// Print the computer's move for a position
fn run_suggest(board: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let board: GameBoard = board.parse().context("Invalid board")?;
    let eval = Minimax::default()
        .evaluate(&board)
        .context("No move to suggest")?;

    println!("{}", board.to_string().replace('/', "\n"));
    println!(
        "{} plays {} (score {}, {} positions searched)",
        Minimax::default().player(),
        eval.best,
        eval.score,
        eval.nodes
    );
    Ok(())
}
