//! Console tic-tac-toe.
//!
//! Two humans, or a human against a random computer opponent, play on a 3x3
//! board over line-based console input. The rules live in
//! [`tictactoe_core`]; this crate is the console shell around them.
//!
//! # Architecture
//!
//! - **Menu**: mode selection, language settings, exit
//! - **Orchestrator**: rounds and play-again sessions
//! - **Players**: human console input and the random computer
//! - **Console**: line I/O behind the [`Prompter`] trait
//!
//! # Example
//!
//! ```no_run
//! use console_tictactoe::{Console, GameConfig, run};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let mut console = Console::stdio(*config.clear_screen());
//! run(&config, &mut console)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod language;
mod menu;
mod mode;
mod orchestrator;
mod players;
mod render;
mod splash;

pub use cli::{Cli, LogLevel};
pub use config::{ConfigError, GameConfig};
pub use console::{Console, ConsoleError, Prompter};
pub use language::{Dictionary, ENGLISH, Language, NORWEGIAN};
pub use menu::{MenuChoice, MenuController, MenuSettings};
pub use mode::GameMode;
pub use orchestrator::{Orchestrator, SessionSummary};
pub use players::{HumanPlayer, Player, RandomPlayer};
pub use render::{render_board, render_hud, render_result};
pub use splash::show_splash;

pub use tictactoe_core::{
    BOARD_SIZE, Board, GameOutcome, Mark, Move, MoveError, Round, RoundState, Square,
    evaluate, is_valid_move, validate_move,
};

use anyhow::Result;
use tracing::{info, instrument};

/// Shows the splash screen (unless its delay is zero) and runs the menu
/// until the user exits.
#[instrument(skip_all)]
pub fn run(config: &GameConfig, io: &mut dyn Prompter) -> Result<()> {
    if !config.splash_delay().is_zero() {
        show_splash(io, config.splash_delay())?;
    }

    let settings = MenuSettings {
        language: *config.language(),
        color: *config.color(),
        seed: *config.seed(),
    };
    info!(?settings, "Starting menu");
    MenuController::new(io, settings).run()
}

/// True when `err` means the console input was closed.
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ConsoleError>(),
        Some(ConsoleError::InputClosed)
    )
}
