//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed mark value used by line sums: X is +1, O is -1.
    pub fn mark(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// One-based player number shown in summaries.
    pub fn number(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Signed contribution of this square to a line sum.
    pub fn value(self) -> i32 {
        match self {
            Square::Empty => 0,
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain store. It does not refuse to overwrite an occupied
/// square; callers route every move through
/// [`validate_move`](crate::validate_move) first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns true if both coordinates lie within the board.
    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Gets the square at the given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Square {
        assert!(
            self.is_in_bounds(row, col),
            "square ({row}, {col}) is outside the {BOARD_SIZE}x{BOARD_SIZE} board"
        );
        self.squares[row][col]
    }

    /// Returns true if the square holds a mark.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds; check
    /// [`Board::is_in_bounds`] first.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != Square::Empty
    }

    /// Marks a square for `player` without any validation.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        assert!(
            self.is_in_bounds(row, col),
            "cannot place at ({row}, {col}): outside the {BOARD_SIZE}x{BOARD_SIZE} board"
        );
        self.squares[row][col] = Square::Occupied(player);
    }

    /// Returns true if no empty squares remain.
    pub fn is_full(&self) -> bool {
        self.squares
            .iter()
            .all(|row| row.iter().all(|&sq| sq != Square::Empty))
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Square; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// Coordinates of every empty square in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, squares)| {
            squares
                .iter()
                .enumerate()
                .filter(|(_, sq)| **sq == Square::Empty)
                .map(move |(col, _)| (row, col))
        })
    }
}
