//! Computer player that picks uniformly random squares.

use super::Player;
use crate::console::Prompter;
use crate::language::Dictionary;
use anyhow::Result;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_core::{BOARD_SIZE, Move, Round, is_valid_move};
use tracing::{debug, instrument};

/// Random computer opponent.
///
/// Samples uniformly random coordinates on the board and keeps the first
/// pair that names an empty square.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player; a seed makes its choices reproducible.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Player for RandomPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(
        &mut self,
        round: &Round,
        _io: &mut dyn Prompter,
        _dictionary: &Dictionary,
    ) -> Result<Move> {
        let board = round.board();
        if board.empty_cells().next().is_none() {
            anyhow::bail!("No valid moves available");
        }

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let row = self.rng.gen_range(0..BOARD_SIZE);
            let col = self.rng.gen_range(0..BOARD_SIZE);
            if is_valid_move(board, row, col) {
                debug!(row, col, attempts, "Computer chose square");
                return Ok(Move::new(row, col));
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
