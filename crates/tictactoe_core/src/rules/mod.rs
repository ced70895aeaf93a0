//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the round state machine and the tests can call them
//! directly.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{GameOutcome, evaluate};
pub use win::{LINES, check_winner, line_sums};
