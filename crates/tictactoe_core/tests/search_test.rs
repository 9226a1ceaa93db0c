//! Tests for the minimax opponent, including exhaustive playouts.

use tictactoe_core::search::{DRAW, LOSS};
use tictactoe_core::{GameBoard, Minimax, Move, Outcome, Player, best_move};

fn outcome(board: &GameBoard) -> Option<Outcome> {
    if let Some(winner) = board.winner() {
        Some(Outcome::Winner(winner))
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Tries every X move from `board` (X to move), answers each with the
/// computer's reply, and fails if X ever completes a line.
fn assert_o_never_loses(board: &mut GameBoard) {
    let candidates: Vec<Move> = board.empty_cells().collect();
    for mv in candidates {
        assert_eq!(board.current_player(), Player::X);
        board.apply_move(mv.row, mv.col).unwrap();

        match outcome(board) {
            Some(Outcome::Winner(Player::X)) => panic!("X won after {}: {}", mv, board),
            Some(_) => {}
            None => {
                board.switch_player();
                let reply = best_move(board).unwrap();
                board.apply_move(reply.row, reply.col).unwrap();

                if outcome(board).is_none() {
                    board.switch_player();
                    assert_o_never_loses(board);
                    board.switch_player();
                }
                board.undo().unwrap();
            }
        }

        board.undo().unwrap();
        board.switch_player();
    }
}

#[test]
fn test_computer_never_loses_when_x_opens() {
    let mut board = GameBoard::new();
    assert_o_never_loses(&mut board);
    assert_eq!(board, GameBoard::new());
}

#[test]
fn test_computer_first_move_never_loses() {
    let first = best_move(&GameBoard::new()).unwrap();

    // O opens, then hands the board to X.
    let mut board = GameBoard::new();
    board.switch_player();
    board.apply_move(first.row, first.col).unwrap();
    board.switch_player();
    assert_eq!(board.current_player(), Player::X);

    let eval = Minimax::new(Player::X).evaluate(&board).unwrap();
    assert!(eval.score <= DRAW, "X should not be able to force a win");

    assert_o_never_loses(&mut board);
}

#[test]
fn test_two_searchers_draw() {
    let mut board = GameBoard::new();
    let x = Minimax::new(Player::X);
    let o = Minimax::new(Player::O);

    let result = loop {
        let searcher = if board.current_player() == Player::X { x } else { o };
        let mv = searcher.evaluate(&board).unwrap().best;
        board.apply_move(mv.row, mv.col).unwrap();
        if let Some(result) = outcome(&board) {
            break result;
        }
        board.switch_player();
    };

    assert_eq!(result, Outcome::Draw);
    assert_eq!(board.history().len(), 9);
}

#[test]
fn test_blocks_immediate_threat() {
    let board: GameBoard = "X.O/.X./...".parse().unwrap();
    assert_eq!(best_move(&board), Ok(Move::new(2, 2)));
}

#[test]
fn test_search_does_not_mutate_board() {
    for s in [".../.../...", "X../.../...", "X.O/.X./...", "XO./.X./..O"] {
        let board: GameBoard = s.parse().unwrap();
        let before = board.clone();
        let _ = best_move(&board);
        assert_eq!(board, before, "{s}");
    }
}

#[test]
fn test_lost_position_scores_loss() {
    // X has two open lines; O can block only one.
    let board: GameBoard = "XX./OX./O..".parse().unwrap();
    let eval = Minimax::default().evaluate(&board).unwrap();
    assert_eq!(eval.score, LOSS);
    // Every cell loses, so the first empty cell is kept.
    assert_eq!(eval.best, Move::new(0, 2));
}
