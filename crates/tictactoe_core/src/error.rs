//! Error types for board operations and move search.

use crate::types::{Move, Player};

/// Error returned when a board operation is rejected.
///
/// A rejected operation never mutates the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Row or column outside `0..3`.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position is already occupied.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] Move),

    /// Undo requested with no moves played.
    #[display("No moves to undo")]
    EmptyHistory,

    /// The last history entry is not an occupied cell on the board.
    #[display("History entry {_0} does not match an occupied cell")]
    CorruptHistory(#[error(not(source))] Move),

    /// A deserialized board breaks a board invariant.
    #[display("Inconsistent board state: {_0}")]
    InconsistentState(#[error(not(source))] &'static str),
}

/// Error returned when the search is asked for a move it cannot make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// Every cell is occupied.
    #[display("No legal moves: the board is full")]
    NoLegalMoves,

    /// The position already has a winner.
    #[display("Game is already over: {_0} has won")]
    GameOver(#[error(not(source))] Player),
}

/// Error returned when board text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {_0}")]
    CellCount(#[error(not(source))] usize),

    /// A character that is not `X`, `O` or `.`.
    #[display("Unexpected character {_0:?} in board")]
    InvalidChar(#[error(not(source))] char),
}
