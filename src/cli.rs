//! Command-line interface for console_tictactoe.

use crate::language::Language;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Console tic-tac-toe for two players or one player against the computer.
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Interface language (overrides the config file)
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,

    /// Draw marks without color
    #[arg(long)]
    pub no_color: bool,

    /// Never clear the screen
    #[arg(long)]
    pub no_clear: bool,

    /// Seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Diagnostic log level written to stderr (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Off)]
    pub log_level: LogLevel,
}

/// Verbosity of diagnostic logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// No logging.
    #[default]
    #[value(alias = "none")]
    Off,
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Session and round events.
    Info,
    /// Every move and prompt.
    Debug,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}
