//! Win detection by signed line sums.
//!
//! X marks count +1 and O marks count -1. A line is won when the absolute
//! value of its sum equals the board size, which for two players is the same
//! as every square on the line holding the same mark.

use crate::types::{BOARD_SIZE, Board, Player};
use tracing::instrument;

/// Number of lines checked: every row, every column and both diagonals.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Every line in scan order: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [[(usize, usize); BOARD_SIZE]; LINE_COUNT] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Signed sum of every line, in the order of [`LINES`].
#[instrument(skip(board))]
pub fn line_sums(board: &Board) -> [i32; LINE_COUNT] {
    LINES.map(|line| {
        line.iter()
            .map(|&(row, col)| board.get(row, col).value())
            .sum::<i32>()
    })
}

/// Returns the owner of the first won line in scan order, if any.
///
/// Two won lines at once cannot arise from validated play, so the scan order
/// never decides between winners in practice.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let target = BOARD_SIZE as i32;
    line_sums(board)
        .into_iter()
        .find(|sum| sum.abs() == target)
        .map(|sum| if sum > 0 { Player::X } else { Player::O })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(line_sums(&board), [0; LINE_COUNT]);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(0, 0, Player::X);
        board.place(0, 1, Player::X);
        board.place(0, 2, Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            board.place(row, 1, Player::O);
        }
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.place(0, 0, Player::O);
        board.place(1, 1, Player::O);
        board.place(2, 2, Player::O);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(0, 2, Player::X);
        board.place(1, 1, Player::X);
        board.place(2, 0, Player::X);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.place(0, 0, Player::X);
        board.place(0, 1, Player::X);
        assert_eq!(check_winner(&board), None);
        assert_eq!(line_sums(&board)[0], 2);
    }

    #[test]
    fn test_mixed_line_not_won() {
        let mut board = Board::new();
        board.place(0, 0, Player::X);
        board.place(0, 1, Player::O);
        board.place(0, 2, Player::X);
        assert_eq!(check_winner(&board), None);
        assert_eq!(line_sums(&board)[0], 1);
    }
}
