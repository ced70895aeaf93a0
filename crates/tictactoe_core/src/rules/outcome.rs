//! Whole-board evaluation.

use super::draw::is_draw;
use super::win::check_winner;
use crate::types::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameOutcome {
    /// No line won and at least one empty square remains.
    #[display("Ongoing")]
    Ongoing,
    /// A player completed a line.
    #[display("Player {_0} wins")]
    Won(Player),
    /// Board full with no line won.
    #[display("Draw")]
    Draw,
}

impl GameOutcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Evaluates the board.
///
/// Wins are checked before fullness, so a full board that contains a won
/// line reports the win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        return GameOutcome::Won(winner);
    }
    if is_draw(board) {
        return GameOutcome::Draw;
    }
    GameOutcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::win::line_sums;
    use crate::types::{BOARD_SIZE, Square};

    /// Decodes `index` in base 3 into a board: 0 empty, 1 X, 2 O.
    fn board_from_index(mut index: u32) -> Board {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match index % 3 {
                    1 => board.place(row, col, Player::X),
                    2 => board.place(row, col, Player::O),
                    _ => {}
                }
                index /= 3;
            }
        }
        board
    }

    fn all_boards() -> impl Iterator<Item = Board> {
        (0..3u32.pow(9)).map(board_from_index)
    }

    #[test]
    fn test_ongoing_iff_no_won_line_and_empty_square() {
        for board in all_boards() {
            let no_line = line_sums(&board).iter().all(|s| s.abs() != 3);
            let has_empty = board
                .rows()
                .iter()
                .flatten()
                .any(|&sq| sq == Square::Empty);
            assert_eq!(
                evaluate(&board) == GameOutcome::Ongoing,
                no_line && has_empty,
                "{board:?}"
            );
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        for board in all_boards().filter(|b| b.is_full()) {
            if line_sums(&board).iter().all(|s| s.abs() != 3) {
                assert_eq!(evaluate(&board), GameOutcome::Draw);
            } else {
                assert!(matches!(evaluate(&board), GameOutcome::Won(_)));
            }
        }
    }

    #[test]
    fn test_three_in_top_row_wins_for_x() {
        let mut board = Board::new();
        board.place(0, 0, Player::X);
        assert_eq!(evaluate(&board), GameOutcome::Ongoing);
        board.place(0, 1, Player::X);
        assert_eq!(evaluate(&board), GameOutcome::Ongoing);
        board.place(0, 2, Player::X);
        assert_eq!(evaluate(&board), GameOutcome::Won(Player::X));
    }

    #[test]
    fn test_alternating_fill_without_line_is_draw() {
        use Player::{O, X};
        // X O X / X O O / O X X
        let layout = [[X, O, X], [X, O, O], [O, X, X]];
        let mut board = Board::new();
        for (r, row) in layout.iter().enumerate() {
            for (c, &player) in row.iter().enumerate() {
                board.place(r, c, player);
            }
        }
        assert_eq!(evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_reports_win() {
        use Player::{O, X};
        // O O O / X X O / X O X  -- O wins the top row on a full board
        let layout = [[O, O, O], [X, X, O], [X, O, X]];
        let mut board = Board::new();
        for (r, row) in layout.iter().enumerate() {
            for (c, &player) in row.iter().enumerate() {
                board.place(r, c, player);
            }
        }
        assert!(board.is_full());
        assert_eq!(evaluate(&board), GameOutcome::Won(O));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!GameOutcome::Ongoing.is_terminal());
        assert!(GameOutcome::Draw.is_terminal());
        assert_eq!(GameOutcome::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(GameOutcome::Draw.winner(), None);
        assert_eq!(GameOutcome::Won(Player::X).to_string(), "Player X wins");
    }
}
