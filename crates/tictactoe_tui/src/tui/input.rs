//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::{Move, SIZE};

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Move, key: KeyCode) -> Move {
    let last = SIZE - 1;
    match key {
        KeyCode::Left => Move::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Move::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up => Move::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Move::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}

/// Maps `1`-`9` to cells in row-major order, as on a phone keypad.
pub fn digit_to_move(c: char) -> Option<Move> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Move::from_index)
}
