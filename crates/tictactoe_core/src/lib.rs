//! Tic-tac-toe board state and exhaustive minimax move search.
//!
//! # Architecture
//!
//! - **Board**: [`GameBoard`] owns the grid, the player to move and the undo stack
//! - **Rules**: pure win and draw detection over a [`Grid`]
//! - **Search**: [`Minimax`] picks the computer's move without touching the board
//! - **Invariants**: properties a legally played board always satisfies
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameBoard, Move, best_move};
//!
//! let mut board = GameBoard::new();
//! board.apply_move(1, 1)?;
//! board.switch_player();
//!
//! let reply = best_move(&board)?;
//! assert_eq!(reply, Move::new(0, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
pub mod rules;
pub mod search;
mod types;

pub use board::GameBoard;
pub use error::{BoardError, ParseBoardError, SearchError};
pub use search::{Evaluation, Minimax, best_move};
pub use types::{CELLS, Cell, Grid, Move, Outcome, Player, SIZE};
