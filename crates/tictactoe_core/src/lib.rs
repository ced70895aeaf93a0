//! Pure tic-tac-toe game logic.
//!
//! The crate knows nothing about consoles or players; it owns the rules:
//!
//! - [`Board`]: 3x3 grid of [`Square`]s with trusted mutation.
//! - [`validate_move`] / [`is_valid_move`]: the gate every move passes.
//! - [`evaluate`]: signed line sums decide [`GameOutcome`].
//! - [`Round`]: turn state machine for one game.
//!
//! ```
//! use tictactoe_core::{GameOutcome, Move, Player, Round, RoundState};
//!
//! let mut round = Round::new();
//! for mv in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     round.play(Move::from(mv)).unwrap();
//! }
//! let state = round.play(Move::new(0, 2)).unwrap();
//! assert_eq!(state, RoundState::Complete(GameOutcome::Won(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
mod round;
pub mod rules;
mod types;
mod validator;

pub use error::MoveError;
pub use position::Move;
pub use round::{Round, RoundState};
pub use rules::{GameOutcome, evaluate};
pub use types::{BOARD_SIZE, Board, Player, Square};
pub use validator::{is_valid_move, validate_move};

/// Alias used where a player is meant as the mark on the board.
pub type Mark = Player;
