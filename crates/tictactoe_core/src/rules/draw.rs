//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Grid;

/// Checks if every cell is occupied.
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().all(|cell| !cell.is_empty())
}

/// Checks if the game is a draw: the grid is full and nobody has a line.
///
/// A grid with an empty cell is never a draw, won or not.
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
