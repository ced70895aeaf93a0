//! Main menu entries.

use crate::language::Dictionary;
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// One of the four fixed menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MenuChoice {
    /// Two humans.
    PlayPvp,
    /// Human against computer.
    PlayPvc,
    /// Language settings.
    Settings,
    /// Quit the program.
    Exit,
}

impl MenuChoice {
    /// Number the user types to pick this entry.
    pub fn code(self) -> u8 {
        match self {
            MenuChoice::PlayPvp => 1,
            MenuChoice::PlayPvc => 2,
            MenuChoice::Settings => 3,
            MenuChoice::Exit => 4,
        }
    }

    /// Localized label.
    pub fn label(self, dictionary: &Dictionary) -> &'static str {
        match self {
            MenuChoice::PlayPvp => dictionary.play_pvp,
            MenuChoice::PlayPvc => dictionary.play_pvc,
            MenuChoice::Settings => dictionary.settings,
            MenuChoice::Exit => dictionary.exit,
        }
    }

    /// Parses a typed menu code.
    #[instrument]
    pub fn from_input(input: &str) -> Option<Self> {
        let code = input.trim().parse::<u8>().ok()?;
        MenuChoice::iter().find(|choice| choice.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for choice in MenuChoice::iter() {
            assert_eq!(MenuChoice::from_input(&choice.code().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_invalid_input() {
        for input in ["", "0", "5", "-1", "one", "1 2", "256"] {
            assert_eq!(MenuChoice::from_input(input), None, "{input:?}");
        }
    }
}
