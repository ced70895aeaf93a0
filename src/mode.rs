//! Game mode selection.

use crate::players::{HumanPlayer, Player, RandomPlayer};
use strum::Display;

/// Who sits on each side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameMode {
    /// Two humans share the console.
    #[strum(to_string = "PvP")]
    PlayerVsPlayer,
    /// The human plays X against the random computer as O.
    #[strum(to_string = "PvC")]
    PlayerVsComputer,
}

impl GameMode {
    /// Builds the X and O players for this mode.
    pub fn players(self, seed: Option<u64>) -> (Box<dyn Player>, Box<dyn Player>) {
        match self {
            GameMode::PlayerVsPlayer => (
                Box::new(HumanPlayer::new("Player 1")),
                Box::new(HumanPlayer::new("Player 2")),
            ),
            GameMode::PlayerVsComputer => (
                Box::new(HumanPlayer::new("Player 1")),
                Box::new(RandomPlayer::new("Computer", seed)),
            ),
        }
    }
}
