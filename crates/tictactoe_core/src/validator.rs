//! The single gate every move passes through before it touches the board.

use crate::error::MoveError;
use crate::position::Move;
use crate::types::Board;
use tracing::{debug, instrument};

/// Returns true if `(row, col)` is on the board and empty.
#[instrument(skip(board))]
pub fn is_valid_move(board: &Board, row: usize, col: usize) -> bool {
    validate_move(board, Move::new(row, col)).is_ok()
}

/// Checks a move against the board.
///
/// # Errors
///
/// [`MoveError::OutOfBounds`] when either coordinate is off the board,
/// [`MoveError::Occupied`] when the square already holds a mark.
#[instrument(skip(board), fields(mv = %mv))]
pub fn validate_move(board: &Board, mv: Move) -> Result<(), MoveError> {
    let Move { row, col } = mv;
    if !board.is_in_bounds(row, col) {
        debug!("Move rejected: out of bounds");
        return Err(MoveError::OutOfBounds { row, col });
    }
    if board.is_occupied(row, col) {
        debug!("Move rejected: square occupied");
        return Err(MoveError::Occupied { row, col });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_SIZE, Player};

    #[test]
    fn test_every_square_valid_on_empty_board() {
        let board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert!(is_valid_move(&board, row, col));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let board = Board::new();
        assert!(!is_valid_move(&board, 3, 0));
        assert!(!is_valid_move(&board, 0, 3));
        assert!(!is_valid_move(&board, usize::MAX, 1));
        assert_eq!(
            validate_move(&board, Move::new(3, 0)),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_one_based_input_past_edge_rejected() {
        let board = Board::new();
        let mv = Move::parse_one_based("4 1").expect("two integers parse");
        assert!(!is_valid_move(&board, mv.row, mv.col));
    }

    #[test]
    fn test_occupied_rejected() {
        let mut board = Board::new();
        board.place(1, 1, Player::X);
        assert!(!is_valid_move(&board, 1, 1));
        assert!(is_valid_move(&board, 1, 2));
        assert_eq!(
            validate_move(&board, Move::new(1, 1)),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
    }
}
