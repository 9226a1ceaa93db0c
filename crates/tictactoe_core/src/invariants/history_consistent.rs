//! History consistency invariant: history matches the occupied cells.

use super::Invariant;
use crate::board::GameBoard;
use std::collections::HashSet;

/// Invariant: history length equals the number of occupied cells, and every
/// history entry is a distinct occupied cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameBoard> for HistoryConsistentInvariant {
    fn holds(board: &GameBoard) -> bool {
        let occupied = board.cells().iter().filter(|c| !c.is_empty()).count();
        let distinct: HashSet<_> = board.history().iter().collect();

        board.history().len() == occupied
            && distinct.len() == occupied
            && board
                .history()
                .iter()
                .all(|mv| board.cell(mv.row, mv.col).is_some_and(|c| !c.is_empty()))
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameBoard::new()));
    }

    #[test]
    fn test_holds_through_moves_and_undo() {
        let mut board = GameBoard::new();
        board.apply_move(1, 1).unwrap();
        board.switch_player();
        board.apply_move(0, 2).unwrap();
        assert!(HistoryConsistentInvariant::holds(&board));

        board.undo().unwrap();
        assert!(HistoryConsistentInvariant::holds(&board));
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn test_parsed_board_holds() {
        let board: GameBoard = "XO./.X./O..".parse().unwrap();
        assert!(HistoryConsistentInvariant::holds(&board));
    }
}
