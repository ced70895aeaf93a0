//! Game orchestration between players.

use crate::console::Prompter;
use crate::language::Dictionary;
use crate::players::Player;
use crate::render::{render_board, render_hud, render_result};
use anyhow::Result;
use derive_getters::Getters;
use tictactoe_core::{GameOutcome, Mark, Round, RoundState};
use tracing::{debug, info, instrument, warn};

/// Tally of the rounds played in one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    rounds: u32,
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: GameOutcome) {
        self.rounds += 1;
        match outcome {
            GameOutcome::Won(Mark::X) => self.x_wins += 1,
            GameOutcome::Won(Mark::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Ongoing => {}
        }
    }
}

/// Drives rounds between two players over a console.
pub struct Orchestrator<'a> {
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    io: &'a mut dyn Prompter,
    dictionary: &'static Dictionary,
    color: bool,
}

impl<'a> Orchestrator<'a> {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        io: &'a mut dyn Prompter,
        dictionary: &'static Dictionary,
        color: bool,
    ) -> Self {
        Self {
            player_x,
            player_o,
            io,
            dictionary,
            color,
        }
    }

    /// Plays rounds until the players decline another one.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run_session(&mut self) -> Result<SessionSummary> {
        info!("Starting session");
        let mut summary = SessionSummary::default();
        loop {
            let outcome = self.play_round()?;
            summary.record(outcome);
            if !self.ask_play_again()? {
                info!(?summary, "Session finished");
                return Ok(summary);
            }
        }
    }

    /// Plays one round on a fresh board and shows the summary.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<GameOutcome> {
        let mut round = Round::new();
        info!("Starting round");

        loop {
            let mark = round.current_player();
            self.io.clear_screen()?;
            self.io
                .print(&render_board(round.board(), self.dictionary, self.color))?;
            self.io
                .print(&render_hud(mark, self.dictionary, self.color))?;

            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            debug!(player = %player.name(), "Waiting for move");
            let mv = player.get_move(&round, &mut *self.io, self.dictionary)?;

            match round.play(mv) {
                Ok(RoundState::AwaitingMove(_)) => {}
                Ok(RoundState::Complete(outcome)) => {
                    self.show_summary(&round, outcome)?;
                    return Ok(outcome);
                }
                Err(e) => warn!(error = %e, %mv, "Player returned an invalid move"),
            }
        }
    }

    /// Clears the screen and prints the result, the final board and the
    /// game-over line.
    fn show_summary(&mut self, round: &Round, outcome: GameOutcome) -> Result<()> {
        self.io.clear_screen()?;
        self.io.print(&render_result(outcome, self.dictionary))?;
        self.io
            .print(&render_board(round.board(), self.dictionary, self.color))?;
        self.io.print(self.dictionary.game_over)?;
        Ok(())
    }

    /// Yes when the answer starts with the localized confirmation.
    fn ask_play_again(&mut self) -> Result<bool> {
        let answer = self.io.ask(self.dictionary.play_again_question)?;
        let again = answer
            .to_lowercase()
            .starts_with(self.dictionary.confirm);
        debug!(answer = %answer, again, "Play again answer");
        Ok(again)
    }
}
