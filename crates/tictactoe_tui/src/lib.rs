//! Terminal tic-tac-toe against a minimax opponent or a second human.
//!
//! # Architecture
//!
//! - **Config**: [`GameConfig`] from TOML, overridden by command-line flags
//! - **Session**: [`Session`] passes the turn and triggers the computer's reply
//! - **TUI**: ratatui rendering and crossterm key handling around a session

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod session;
pub mod tui;

pub use config::{ConfigError, GameConfig, GameMode};
pub use session::{Session, SessionError, Turn};
