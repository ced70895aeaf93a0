//! Human player reading moves from the console.

use super::Player;
use crate::console::Prompter;
use crate::language::Dictionary;
use anyhow::Result;
use derive_new::new;
use tictactoe_core::{Move, Round, is_valid_move};
use tracing::{debug, instrument};

/// Human player typing `row col` with 1-based numbers.
#[derive(Debug, Clone, new)]
pub struct HumanPlayer {
    #[new(into)]
    name: String,
}

impl Player for HumanPlayer {
    /// Prompts until a line parses and names an empty square.
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(
        &mut self,
        round: &Round,
        io: &mut dyn Prompter,
        dictionary: &Dictionary,
    ) -> Result<Move> {
        loop {
            let input = io.ask(dictionary.place_mark)?;
            match Move::parse_one_based(&input) {
                Some(mv) if is_valid_move(round.board(), mv.row, mv.col) => {
                    debug!(%mv, "Move accepted");
                    return Ok(mv);
                }
                Some(mv) => debug!(%mv, "Move rejected: not an empty square on the board"),
                None => debug!(input = %input, "Move rejected: malformed input"),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
