//! Zero-based move coordinates and their 1-based text form.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move on the board as zero-based `(row, col)` coordinates.
///
/// Constructing a `Move` does not check bounds; that is the job of
/// [`validate_move`](crate::validate_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({row}, {col})")]
pub struct Move {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Move {
    /// Creates a move from zero-based coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses `"<row> <col>"` with 1-based numbers into a zero-based move.
    ///
    /// Returns `None` unless the input is exactly two whitespace-separated
    /// positive integers. Values past the board edge still parse and are
    /// left for the validator to reject.
    #[instrument]
    pub fn parse_one_based(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let row = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
        let col = parts.next()?.parse::<usize>().ok()?.checked_sub(1)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { row, col })
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
