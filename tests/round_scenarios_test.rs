//! End-to-end rule scenarios through the public API.

use console_tictactoe::{
    Board, GameOutcome, Mark, Move, MoveError, Round, RoundState, evaluate, is_valid_move,
};

#[test]
fn test_three_in_a_row_without_interference() {
    let mut board = Board::new();
    for col in 0..3 {
        assert!(is_valid_move(&board, 0, col));
        board.place(0, col, Mark::X);
    }
    assert_eq!(evaluate(&board), GameOutcome::Won(Mark::X));
}

#[test]
fn test_row_four_is_rejected() {
    let board = Board::new();
    let mv = Move::parse_one_based("4 1").unwrap();
    assert_eq!(mv, Move::new(3, 0));
    assert!(!is_valid_move(&board, mv.row, mv.col));
}

#[test]
fn test_round_refuses_moves_after_win() {
    let mut round = Round::new();
    for mv in [(2, 0), (0, 0), (1, 1), (0, 1), (0, 2)] {
        round.play(Move::from(mv)).unwrap();
    }
    assert_eq!(round.state(), RoundState::Complete(GameOutcome::Won(Mark::X)));
    assert_eq!(round.play(Move::new(2, 2)), Err(MoveError::RoundOver));
    assert_eq!(round.history().len(), 5);
}
