//! One round of tic-tac-toe: board, current player and the turn state machine.

use crate::error::MoveError;
use crate::position::Move;
use crate::rules::{GameOutcome, evaluate};
use crate::types::{Board, Player};
use crate::validator::validate_move;
use tracing::{debug, info, instrument};

/// Where a round stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for `player` to move.
    AwaitingMove(Player),
    /// The round ended with a terminal outcome.
    Complete(GameOutcome),
}

/// A single round from empty board to terminal outcome.
///
/// X always moves first. Each accepted move is validated, placed, and
/// followed by a fresh evaluation of the board.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    current_player: Player,
    state: RoundState,
    history: Vec<Move>,
}

impl Round {
    /// Player who opens every round.
    pub const FIRST_PLAYER: Player = Player::X;

    /// Creates a round with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Self::FIRST_PLAYER,
            state: RoundState::AwaitingMove(Self::FIRST_PLAYER),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is, or who made the final move once
    /// the round is complete.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the terminal outcome, or `Ongoing` while moves remain.
    pub fn outcome(&self) -> GameOutcome {
        match self.state {
            RoundState::AwaitingMove(_) => GameOutcome::Ongoing,
            RoundState::Complete(outcome) => outcome,
        }
    }

    /// Returns true once a terminal outcome was reached.
    pub fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Complete(_))
    }

    /// Number of moves applied so far.
    pub fn moves_played(&self) -> usize {
        self.history.len()
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays a move for the current player.
    ///
    /// # Errors
    ///
    /// [`MoveError::RoundOver`] once the round is complete, otherwise any
    /// error from [`validate_move`]. A refused move leaves the round
    /// untouched.
    #[instrument(skip(self), fields(player = %self.current_player, mv = %mv))]
    pub fn play(&mut self, mv: Move) -> Result<RoundState, MoveError> {
        if self.is_over() {
            debug!("Move rejected: round is over");
            return Err(MoveError::RoundOver);
        }
        validate_move(&self.board, mv)?;

        self.board.place(mv.row, mv.col, self.current_player);
        self.history.push(mv);

        self.state = match evaluate(&self.board) {
            GameOutcome::Ongoing => {
                self.current_player = self.current_player.opponent();
                debug!(next = %self.current_player, "Turn switched");
                RoundState::AwaitingMove(self.current_player)
            }
            outcome => {
                info!(%outcome, moves = self.history.len(), "Round complete");
                RoundState::Complete(outcome)
            }
        };
        Ok(self.state)
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
