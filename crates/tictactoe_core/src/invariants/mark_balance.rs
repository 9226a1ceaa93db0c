//! Mark balance invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::board::GameBoard;
use crate::types::{Cell, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// Holds whenever X opens and the turn passes after every non-final move.
pub struct MarkBalanceInvariant;

impl Invariant<GameBoard> for MarkBalanceInvariant {
    fn holds(board: &GameBoard) -> bool {
        let count = |p: Player| {
            board
                .cells()
                .iter()
                .filter(|c| **c == Cell::Occupied(p))
                .count()
        };
        let (x, o) = (count(Player::X), count(Player::O));
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_boards_hold() {
        for s in [".../.../...", "X../.../...", "XO./.../...", "XOX/OXO/OXX"] {
            let board: GameBoard = s.parse().unwrap();
            assert!(MarkBalanceInvariant::holds(&board), "{s}");
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let board: GameBoard = "O../.../...".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let board: GameBoard = "XX./.../...".parse().unwrap();
        assert!(!MarkBalanceInvariant::holds(&board));
    }
}
