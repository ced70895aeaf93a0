//! Console tic-tac-toe binary.

use anyhow::Result;
use clap::Parser;
use console_tictactoe::{Cli, Console, GameConfig, LogLevel, is_input_closed, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let config = GameConfig::load(cli.config.as_deref())?.with_cli_overrides(&cli);
    let mut console = Console::stdio(*config.clear_screen());

    match run(&config, &mut console) {
        Err(e) if is_input_closed(&e) => {
            info!("Input closed, exiting");
            Ok(())
        }
        result => result,
    }
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive())),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
