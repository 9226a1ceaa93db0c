//! Game session: turn handling around a [`GameBoard`].
//!
//! The board itself never passes the turn. The session does it after each
//! move that doesn't end the game, and asks the search for a reply when the
//! computer is to move.

use crate::config::{GameConfig, GameMode};
use derive_more::{Display, Error, From};
use tictactoe_core::invariants;
use tictactoe_core::{BoardError, GameBoard, Minimax, Move, Outcome, Player, SearchError};
use tracing::{debug, info, instrument, warn};

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The board rejected the operation.
    #[display("{_0}")]
    #[from]
    Board(BoardError),

    /// The search could not produce a reply.
    #[display("{_0}")]
    #[from]
    Search(SearchError),

    /// The game has already finished.
    #[display("Game is over: {_0}")]
    GameOver(#[error(not(source))] Outcome),

    /// The computer is to move, not a human.
    #[display("It is not your turn: {_0} is played by the computer")]
    NotYourTurn(#[error(not(source))] Player),
}

/// Moves made by one call to [`Session::handle_move`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Turn {
    /// Each mark placed, in order.
    pub moves: Vec<(Player, Move)>,
    /// Outcome if the game ended during this turn.
    pub outcome: Option<Outcome>,
}

/// One game between two named players.
#[derive(Debug, Clone)]
pub struct Session {
    board: GameBoard,
    mode: GameMode,
    names: [String; 2],
    search: Option<Minimax>,
}

impl Session {
    /// Creates a session with an empty board.
    #[instrument(skip(config), fields(mode = %config.mode()))]
    pub fn new(config: &GameConfig) -> Self {
        let mode = *config.mode();
        Self {
            board: GameBoard::new(),
            mode,
            names: [
                config.player_name(Player::X),
                config.player_name(Player::O),
            ],
            search: mode.computer().map(Minimax::new),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the display name for `player`.
    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.names[0],
            Player::O => &self.names[1],
        }
    }

    /// Returns the outcome if the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.board.winner() {
            Some(Outcome::Winner(winner))
        } else if self.board.is_draw() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Returns the completed line, for highlighting.
    pub fn winning_line(&self) -> Option<[Move; 3]> {
        self.board.winning_line()
    }

    fn is_computer(&self, player: Player) -> bool {
        self.search.is_some_and(|search| search.player() == player)
    }

    /// Plays a human move, then the computer's reply when it is due.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] once the game has ended,
    /// [`SessionError::NotYourTurn`] while the computer is to move, and
    /// [`SessionError::Board`] for an occupied or off-board cell. If the
    /// search cannot reply, the human's move is taken back before
    /// [`SessionError::Search`] is returned. Nothing changes on error.
    #[instrument(skip(self), fields(player = %self.board.current_player()))]
    pub fn handle_move(&mut self, mv: Move) -> Result<Turn, SessionError> {
        if let Some(outcome) = self.outcome() {
            return Err(SessionError::GameOver(outcome));
        }
        let mover = self.board.current_player();
        if self.is_computer(mover) {
            return Err(SessionError::NotYourTurn(mover));
        }

        let mut turn = Turn::default();
        self.place(mover, mv, &mut turn)?;

        if let Some(search) = self.search {
            let mover = self.board.current_player();
            if turn.outcome.is_none() && mover == search.player() {
                let reply = match search.evaluate(&self.board) {
                    Ok(reply) => reply,
                    Err(e) => {
                        warn!(error = %e, "Search failed, taking back the move");
                        self.undo_one()?;
                        return Err(e.into());
                    }
                };
                debug!(best = %reply.best, score = reply.score, nodes = reply.nodes, "Computer reply");
                self.place(mover, reply.best, &mut turn)?;
            }
        }

        Ok(turn)
    }

    /// Applies one move and hands over the turn unless the game ended.
    fn place(&mut self, mover: Player, mv: Move, turn: &mut Turn) -> Result<(), SessionError> {
        self.board.apply_move(mv.row, mv.col)?;
        turn.moves.push((mover, mv));

        match self.outcome() {
            Some(outcome) => {
                info!(%outcome, "Game over");
                turn.outcome = Some(outcome);
            }
            None => self.board.switch_player(),
        }

        self.check_invariants();
        Ok(())
    }

    /// Takes back the last move, and the computer's move before it when
    /// that leaves the computer to move.
    ///
    /// Returns the undone moves, newest first.
    ///
    /// # Errors
    ///
    /// [`SessionError::Board`] with [`BoardError::EmptyHistory`] if nothing
    /// has been played.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Vec<Move>, SessionError> {
        let mut undone = vec![self.undo_one()?];

        if self.is_computer(self.board.current_player()) && !self.board.history().is_empty() {
            undone.push(self.undo_one()?);
        }

        self.check_invariants();
        debug!(?undone, "Undo complete");
        Ok(undone)
    }

    fn undo_one(&mut self) -> Result<Move, SessionError> {
        let ended = self.outcome().is_some();
        let mv = self.board.undo()?;
        // The move that ended the game never passed the turn.
        if ended {
            self.board.switch_player();
        }
        Ok(mv)
    }

    /// Starts a fresh game with the same players.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        info!("Game reset");
    }

    /// One-line summary of the game for the status bar.
    pub fn status_message(&self) -> String {
        match self.outcome() {
            Some(Outcome::Winner(winner)) => format!("{} wins!", self.player_name(winner)),
            Some(Outcome::Draw) => "It's a draw!".to_string(),
            None => {
                let player = self.board.current_player();
                format!("{}'s turn ({})", self.player_name(player), player)
            }
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            invariants::check_board(&self.board).is_ok(),
            "Board invariants violated: {:?}",
            invariants::check_board(&self.board)
        );
    }
}
