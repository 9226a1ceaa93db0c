//! Mutable game state: grid, player to move and undo history.

use crate::error::{BoardError, ParseBoardError};
use crate::invariants::{HistoryConsistentInvariant, Invariant, MarkBalanceInvariant};
use crate::rules;
use crate::types::{CELLS, Cell, Grid, Move, Player, SIZE};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A tic-tac-toe game in progress.
///
/// `apply_move` places the current player's mark but does not hand the turn
/// over; the caller decides whether to call [`GameBoard::switch_player`]
/// once it has checked for a win or draw.
///
/// Deserialization rejects a board whose history disagrees with its grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardState")]
pub struct GameBoard {
    /// Cells in row-major order.
    cells: Grid,
    /// Player whose mark the next `apply_move` places.
    current_player: Player,
    /// Applied moves, most recent last.
    history: Vec<Move>,
}

impl GameBoard {
    /// Creates an empty board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
            current_player: Player::X,
            history: Vec::with_capacity(CELLS),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates outside `0..3` and
    /// [`BoardError::Occupied`] if the cell is taken. The board is unchanged
    /// on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        let mv = Move::new(row, col);
        let Some(index) = mv.index() else {
            warn!("Rejected move off the board");
            return Err(BoardError::OutOfBounds { row, col });
        };

        if !self.cells[index].is_empty() {
            warn!("Rejected move on occupied cell");
            return Err(BoardError::Occupied(mv));
        }

        self.cells[index] = Cell::Occupied(self.current_player);
        self.history.push(mv);
        debug!(moves = self.history.len(), "Move applied");
        Ok(())
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.current_player))]
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Takes back the most recent move and switches the player.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyHistory`] if no move has been played, and
    /// [`BoardError::CorruptHistory`] if the last entry is not an occupied
    /// cell. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Move, BoardError> {
        let mv = *self.history.last().ok_or(BoardError::EmptyHistory)?;
        let Some(index) = mv.index().filter(|&i| !self.cells[i].is_empty()) else {
            warn!(%mv, "History entry has no mark to take back");
            return Err(BoardError::CorruptHistory(mv));
        };

        self.history.pop();
        self.cells[index] = Cell::Empty;
        self.switch_player();
        debug!(%mv, "Move undone");
        Ok(mv)
    }

    /// Checks whether the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.cells)
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.cells)
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.cells)
    }

    /// Returns the coordinates of the complete line [`GameBoard::winner`] found.
    pub fn winning_line(&self) -> Option<[Move; 3]> {
        rules::winning_line(&self.cells)
    }

    /// Returns the cell at `(row, col)`, or `None` if off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        Move::new(row, col).index().map(|i| self.cells[i])
    }

    /// Returns the player whose mark the next move places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    /// Returns the empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|mv| mv.index().is_some_and(|i| self.cells[i].is_empty()))
    }

    /// Clears the board, the history, and gives the move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
        self.history.clear();
        self.current_player = Player::X;
    }
}

/// Serialized form of [`GameBoard`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardState {
    cells: Grid,
    current_player: Player,
    history: Vec<Move>,
}

impl TryFrom<BoardState> for GameBoard {
    type Error = BoardError;

    #[instrument(skip_all)]
    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        let board = Self {
            cells: state.cells,
            current_player: state.current_player,
            history: state.history,
        };

        if !HistoryConsistentInvariant::holds(&board) {
            warn!(history = ?board.history, "Rejected board with inconsistent history");
            return Err(BoardError::InconsistentState(
                HistoryConsistentInvariant::description(),
            ));
        }
        if !MarkBalanceInvariant::holds(&board) {
            warn!(board = %board, "Rejected board with unbalanced marks");
            return Err(BoardError::InconsistentState(
                MarkBalanceInvariant::description(),
            ));
        }
        Ok(board)
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameBoard {
    /// Writes three rows of `X`, `O` and `.` separated by `/`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIZE).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for GameBoard {
    type Err = ParseBoardError;

    /// Parses `X`, `O` and `.` cells in row-major order.
    ///
    /// `/` and whitespace are ignored. History is filled in row-major order,
    /// which keeps undo well defined but is not the order the moves were
    /// played in. X is to move when both marks are equally common.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for c in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let cell = match c.to_ascii_uppercase() {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                '.' => Cell::Empty,
                _ => return Err(ParseBoardError::InvalidChar(c)),
            };
            cells.push(cell);
        }

        let cells: Grid = cells
            .try_into()
            .map_err(|v: Vec<Cell>| ParseBoardError::CellCount(v.len()))?;

        let history: Vec<Move> = Move::all()
            .filter(|mv| mv.index().is_some_and(|i| !cells[i].is_empty()))
            .collect();
        let count = |p: Player| cells.iter().filter(|c| **c == Cell::Occupied(p)).count();
        let current_player = if count(Player::X) > count(Player::O) {
            Player::O
        } else {
            Player::X
        };

        Ok(Self {
            cells,
            current_player,
            history,
        })
    }
}
