//! Tests for session turn handling against the computer.

use tictactoe_core::{GameBoard, Move, Outcome, Player, invariants};
use tictactoe_tui::{GameConfig, GameMode, Session, SessionError};

fn vs_computer() -> Session {
    Session::new(&GameConfig::new(GameMode::VsComputer))
}

#[test]
fn test_computer_replies_after_human_move() {
    let mut session = vs_computer();
    let turn = session.handle_move(Move::new(1, 1)).unwrap();

    assert_eq!(turn.moves.len(), 2);
    assert_eq!(turn.moves[0], (Player::X, Move::new(1, 1)));
    // Corners hold the draw against a center opening; (0, 0) comes first.
    assert_eq!(turn.moves[1], (Player::O, Move::new(0, 0)));
    assert_eq!(turn.outcome, None);
    assert_eq!(session.board().current_player(), Player::X);
}

#[test]
fn test_computer_blocks() {
    let mut session = vs_computer();
    session.handle_move(Move::new(1, 1)).unwrap(); // O takes (0, 0)
    let turn = session.handle_move(Move::new(0, 1)).unwrap();
    // X threatens (2, 1) down the middle column.
    assert_eq!(turn.moves[1], (Player::O, Move::new(2, 1)));
}

#[test]
fn test_undo_takes_back_both_moves() {
    let mut session = vs_computer();
    session.handle_move(Move::new(1, 1)).unwrap();

    let undone = session.undo().unwrap();
    assert_eq!(undone, vec![Move::new(0, 0), Move::new(1, 1)]);
    assert_eq!(session.board(), &GameBoard::new());
}

#[test]
fn test_undo_after_game_over_returns_to_human() {
    let mut session = vs_computer();
    let mut last_turn = None;
    // Play the first free cell until the game ends.
    while session.outcome().is_none() {
        let mv = session.board().empty_cells().next().unwrap();
        last_turn = Some(session.handle_move(mv).unwrap());
    }
    let last_turn = last_turn.unwrap();
    let (last_mover, _) = *last_turn.moves.last().unwrap();
    if last_turn.outcome == Some(Outcome::Winner(Player::O)) {
        assert_eq!(session.status_message(), "AI Bot wins!");
    }

    let before = session.board().history().len();
    let undone = session.undo().unwrap();

    // A finishing computer move is undone together with the human move before it.
    let expected = if last_mover == Player::O { 2 } else { 1 };
    assert_eq!(undone.len(), expected);
    assert_eq!(session.board().history().len(), before - expected);
    assert_eq!(session.outcome(), None);
    assert_eq!(session.board().current_player(), Player::X);
    assert!(invariants::check_board(session.board()).is_ok());
}

#[test]
fn test_game_over_rejects_moves() {
    let mut session = vs_computer();
    let mut last = None;
    // Play the first free cell until the game ends.
    while session.outcome().is_none() {
        let mv = session.board().empty_cells().next().unwrap();
        last = session.handle_move(mv).unwrap().outcome;
    }
    assert_eq!(last, session.outcome());
    assert_ne!(last, Some(Outcome::Winner(Player::X)));

    let err = session.handle_move(Move::new(0, 0)).unwrap_err();
    assert!(matches!(err, SessionError::GameOver(_)));
}

#[test]
fn test_human_never_beats_computer() {
    fn explore(session: &Session) {
        for mv in session.board().empty_cells().collect::<Vec<_>>() {
            let mut next = session.clone();
            let turn = next.handle_move(mv).unwrap();
            match turn.outcome {
                Some(Outcome::Winner(Player::X)) => panic!("X won: {}", next.board()),
                Some(_) => {}
                None => explore(&next),
            }
        }
    }
    explore(&vs_computer());
}

#[test]
fn test_multiplayer_undo_single_move() {
    let mut session = Session::new(&GameConfig::new(GameMode::Multiplayer));
    session.handle_move(Move::new(0, 0)).unwrap();
    session.handle_move(Move::new(1, 1)).unwrap();

    assert_eq!(session.undo().unwrap(), vec![Move::new(1, 1)]);
    assert_eq!(session.board().current_player(), Player::O);
}
