//! Win detection logic for tic-tac-toe.

use crate::types::{Cell, Grid, Move, Player};

/// Every line that wins, as row-major indices, in scan order.
///
/// Rows and columns interleave (row 0, column 0, row 1, ...), then the main
/// diagonal and the anti-diagonal. On artificial boards with more than one
/// complete line, the earliest entry here is the one reported.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [3, 4, 5],
    [1, 4, 7],
    [6, 7, 8],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn first_complete_line(grid: &Grid) -> Option<(Player, [usize; 3])> {
    LINES.iter().find_map(|&[a, b, c]| match grid[a] {
        Cell::Occupied(player) if grid[b] == grid[a] && grid[c] == grid[a] => {
            Some((player, [a, b, c]))
        }
        _ => None,
    })
}

/// Checks if there is a winner on the grid.
///
/// Returns `Some(player)` for the first complete line in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(grid: &Grid) -> Option<Player> {
    first_complete_line(grid).map(|(player, _)| player)
}

/// Returns the coordinates of the line [`check_winner`] would report.
pub fn winning_line(grid: &Grid) -> Option<[Move; 3]> {
    first_complete_line(grid).map(|(_, line)| {
        line.map(|i| Move::new(i / crate::SIZE, i % crate::SIZE))
    })
}
