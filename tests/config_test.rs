//! Tests for config file loading and command-line overrides.

use clap::Parser;
use console_tictactoe::{Cli, GameConfig, Language};
use std::io::Write;
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = GameConfig::load(None).unwrap();
    assert_eq!(*config.language(), Language::English);
    assert_eq!(config.splash_delay(), Duration::from_millis(2500));
    assert!(*config.color());
    assert!(*config.clear_screen());
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "language = \"norwegian\"").unwrap();
    writeln!(file, "splash_delay_ms = 0").unwrap();
    writeln!(file, "seed = 7").unwrap();

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.language(), Language::Norwegian);
    assert!(config.splash_delay().is_zero());
    assert_eq!(*config.seed(), Some(7));
    assert!(*config.color());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "language = \"klingon\"").unwrap();

    let err = GameConfig::load(Some(file.path())).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "language = \"norwegian\"").unwrap();
    writeln!(file, "seed = 7").unwrap();

    let cli = Cli::parse_from([
        "console_tictactoe",
        "--language",
        "english",
        "--no-splash",
        "--no-color",
        "--seed",
        "11",
    ]);
    let config = GameConfig::load(Some(file.path()))
        .unwrap()
        .with_cli_overrides(&cli);

    assert_eq!(*config.language(), Language::English);
    assert!(config.splash_delay().is_zero());
    assert!(!*config.color());
    assert!(*config.clear_screen());
    assert_eq!(*config.seed(), Some(11));
}
