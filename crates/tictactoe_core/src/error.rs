//! Errors raised when a move cannot be applied.

use derive_more::{Display, Error};

/// Reason a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates fall outside the board.
    #[display("Square ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// Square already holds a mark.
    #[display("Square ({row}, {col}) is already occupied")]
    Occupied {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
    },
    /// The round already reached a terminal outcome.
    #[display("Round is already over")]
    RoundOver,
}
