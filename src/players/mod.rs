//! Player trait and implementations.

mod human;
mod random;

pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::console::Prompter;
use crate::language::Dictionary;
use anyhow::Result;
use tictactoe_core::{Move, Round};

/// Anything that can choose a move for the side to play.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Implementations only return moves that pass
    /// [`is_valid_move`](tictactoe_core::is_valid_move) on the round's board.
    fn get_move(
        &mut self,
        round: &Round,
        io: &mut dyn Prompter,
        dictionary: &Dictionary,
    ) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
