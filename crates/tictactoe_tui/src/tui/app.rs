//! Application state and key handling.

use super::input::{digit_to_move, move_cursor};
use crate::session::Session;
use crossterm::event::KeyCode;
use tictactoe_core::Move;
use tracing::{debug, warn};

/// Terminal application state.
pub struct App {
    session: Session,
    cursor: Move,
    error: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the application around a session, cursor in the center.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Move::new(1, 1),
            error: None,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Move {
        self.cursor
    }

    /// Checks whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Text for the status bar: the last error, or the game status.
    pub fn status_message(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| self.session.status_message())
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key");
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('u') => self.undo(),
            KeyCode::Char('r') => {
                self.session.reset();
                self.error = None;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(mv) = digit_to_move(c) {
                    self.cursor = mv;
                    self.play(mv);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    fn play(&mut self, mv: Move) {
        match self.session.handle_move(mv) {
            Ok(turn) => {
                debug!(?turn, "Turn played");
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.error = Some(e.to_string());
            }
        }
    }

    fn undo(&mut self) {
        match self.session.undo() {
            Ok(_) => self.error = None,
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
