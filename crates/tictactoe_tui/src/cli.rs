//! Command-line interface.

use crate::config::GameMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
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
        /// Opponent: the computer, or a second human
        #[arg(short, long, value_enum)]
        mode: Option<GameMode>,

        /// Name shown for X
        #[arg(long)]
        player_x: Option<String>,

        /// Name shown for O
        #[arg(long)]
        player_o: Option<String>,

        /// Path to the config file (defaults apply if it doesn't exist)
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,
    },

    /// Print the computer's move for a position
    Suggest {
        /// Board as nine cells of X, O or '.', rows optionally split by '/'
        board: String,
    },
}
