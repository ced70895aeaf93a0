//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no won line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn fill(rows: [[Player; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &player) in row.iter().enumerate() {
                board.place(r, c, player);
            }
        }
        board
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(1, 1, Player::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_nine_moves_without_line_is_draw() {
        // Ends as O X X / X X O / O O X
        let moves = [(1, 1), (0, 0), (0, 2), (2, 0), (1, 0), (1, 2), (0, 1), (2, 1), (2, 2)];
        let mut board = Board::new();
        let mut player = Player::X;
        for (n, &(row, col)) in moves.iter().enumerate() {
            assert!(!is_draw(&board), "drawn after {n} moves");
            board.place(row, col, player);
            player = player.opponent();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
