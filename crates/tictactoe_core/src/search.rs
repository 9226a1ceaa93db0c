//! Exhaustive minimax search for the computer's move.
//!
//! The search walks the full game tree with no pruning, no memoization and
//! no depth discount: a win five plies away scores the same as a win on the
//! next move. It never touches the caller's board. It copies the grid once
//! and places and clears marks on that copy as it recurses.

use crate::board::GameBoard;
use crate::error::SearchError;
use crate::rules::{check_winner, is_full};
use crate::types::{CELLS, Cell, Grid, Move, Player};
use tracing::{debug, instrument};

/// Score of a position the searching player has won.
pub const WIN: i32 = 1;
/// Score of a drawn position.
pub const DRAW: i32 = 0;
/// Score of a position the opponent has won.
pub const LOSS: i32 = -1;

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The chosen move.
    pub best: Move,
    /// Minimax value of the chosen move for the searching player.
    pub score: i32,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Minimax searcher playing one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    player: Player,
}

impl Default for Minimax {
    /// The computer plays O.
    fn default() -> Self {
        Self::new(Player::O)
    }
}

impl Minimax {
    /// Creates a searcher that places `player`'s mark at the root.
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    /// Returns the side this searcher plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Scores every empty cell and returns the best one.
    ///
    /// Cells are tried in row-major order and a later cell replaces the
    /// running best only with a strictly greater score, so ties go to the
    /// earliest cell. The board's `current_player` is ignored.
    ///
    /// # Errors
    ///
    /// [`SearchError::GameOver`] if someone already has a line,
    /// [`SearchError::NoLegalMoves`] if the board is full.
    #[instrument(skip_all, fields(player = %self.player, board = %board))]
    pub fn evaluate(&self, board: &GameBoard) -> Result<Evaluation, SearchError> {
        if let Some(winner) = board.winner() {
            return Err(SearchError::GameOver(winner));
        }

        let mut grid = *board.cells();
        let mut nodes = 0;
        let mut best: Option<(usize, i32)> = None;

        for index in 0..CELLS {
            if !grid[index].is_empty() {
                continue;
            }
            grid[index] = Cell::Occupied(self.player);
            let score = self.minimax(&mut grid, false, &mut nodes);
            grid[index] = Cell::Empty;

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(SearchError::NoLegalMoves)?;
        let best = Move::from_index(index).ok_or(SearchError::NoLegalMoves)?;
        debug!(%best, score, nodes, "Search complete");
        Ok(Evaluation { best, score, nodes })
    }

    /// Value of `grid` for `self.player`, with the side to move implied by
    /// `maximizing`. Leaves `grid` as it found it.
    fn minimax(&self, grid: &mut Grid, maximizing: bool, nodes: &mut u64) -> i32 {
        *nodes += 1;

        match check_winner(grid) {
            Some(winner) if winner == self.player => return WIN,
            Some(_) => return LOSS,
            None if is_full(grid) => return DRAW,
            None => {}
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..CELLS {
            if !grid[index].is_empty() {
                continue;
            }
            grid[index] = Cell::Occupied(mover);
            let score = self.minimax(grid, !maximizing, nodes);
            grid[index] = Cell::Empty;

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

/// Returns the computer's (O's) best move on `board`.
///
/// # Errors
///
/// See [`Minimax::evaluate`].
pub fn best_move(board: &GameBoard) -> Result<Move, SearchError> {
    Minimax::default().evaluate(board).map(|eval| eval.best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> GameBoard {
        s.parse().unwrap()
    }

    #[test]
    fn test_blocks_diagonal_threat() {
        let b = board("X.O/.X./...");
        assert_eq!(best_move(&b), Ok(Move::new(2, 2)));
    }

    #[test]
    fn test_board_unchanged_after_search() {
        let b = board("X.O/.X./...");
        let before = b.clone();
        let _ = Minimax::default().evaluate(&b);
        assert_eq!(b, before);
    }

    #[test]
    fn test_empty_board_ties_go_to_first_cell() {
        let eval = Minimax::default().evaluate(&GameBoard::new()).unwrap();
        assert_eq!(eval.best, Move::new(0, 0));
        assert_eq!(eval.score, DRAW);
        assert!(eval.nodes > 0);
    }

    #[test]
    fn test_no_preference_for_faster_win() {
        // (2,2) wins at once; (0,2) forks and wins two moves later.
        let eval = Minimax::default().evaluate(&board("XX./.../OO.")).unwrap();
        assert_eq!(eval.best, Move::new(0, 2));
        assert_eq!(eval.score, WIN);
    }

    #[test]
    fn test_takes_last_cell() {
        let b = board("XOX/XOO/OX.");
        let eval = Minimax::default().evaluate(&b).unwrap();
        assert_eq!(eval.best, Move::new(2, 2));
        assert_eq!(eval.score, DRAW);
        assert_eq!(eval.nodes, 1);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let b = board("XOX/XOO/OXX");
        assert_eq!(best_move(&b), Err(SearchError::NoLegalMoves));
    }

    #[test]
    fn test_won_board_is_rejected() {
        let b = board("XXX/OO./...");
        assert_eq!(best_move(&b), Err(SearchError::GameOver(Player::X)));
    }

    #[test]
    fn test_searching_as_x() {
        // X completes the top row.
        let eval = Minimax::new(Player::X).evaluate(&board("XX./OO./...")).unwrap();
        assert_eq!(eval.best, Move::new(0, 2));
        assert_eq!(eval.score, WIN);
    }
}
