//! Localized user-facing text.
//!
//! The game only ever reads strings out of a [`Dictionary`]; switching
//! language swaps which dictionary is active.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Supported interface languages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English text.
    #[default]
    English,
    /// Norwegian (bokmål) text.
    Norwegian,
}

impl Language {
    /// Returns the string table for this language.
    pub fn dictionary(self) -> &'static Dictionary {
        match self {
            Language::English => &ENGLISH,
            Language::Norwegian => &NORWEGIAN,
        }
    }

    /// One-based number shown next to the language in the settings list.
    pub fn code(self) -> usize {
        Language::iter().position(|l| l == self).map_or(0, |i| i + 1)
    }

    /// Parses a settings answer such as `"1"` or `"2"`.
    #[instrument]
    pub fn from_choice(input: &str) -> Option<Self> {
        Language::iter().find(|l| l.code().to_string() == input.trim())
    }
}

/// Every message the game prints, keyed by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    /// Heading above the main menu.
    pub menu_title: &'static str,
    /// Menu entry for two human players.
    pub play_pvp: &'static str,
    /// Menu entry for human against computer.
    pub play_pvc: &'static str,
    /// Menu entry for the settings screen.
    pub settings: &'static str,
    /// Menu entry that quits the program.
    pub exit: &'static str,
    /// Heading of the language list.
    pub choose_language: &'static str,
    /// Prompt for a settings choice.
    pub enter_choice: &'static str,
    /// Confirmation after the settings screen.
    pub language_changed: &'static str,
    /// Prompt to press Enter before returning to the menu.
    pub return_to_menu: &'static str,
    /// Heading above the rendered board.
    pub current_game_board: &'static str,
    /// Label in front of the current player's mark.
    pub current_player: &'static str,
    /// Prompt for a move.
    pub place_mark: &'static str,
    /// Label in front of the winning player's number.
    pub winner: &'static str,
    /// Summary line for a drawn round.
    pub draw: &'static str,
    /// Closing line of the round summary.
    pub game_over: &'static str,
    /// Prompt asking whether to play another round.
    pub play_again_question: &'static str,
    /// Answer prefix that means yes.
    pub confirm: &'static str,
}

/// English strings.
pub static ENGLISH: Dictionary = Dictionary {
    menu_title: "MENU",
    play_pvp: "Play Game (PvP)",
    play_pvc: "Play Game (PvC)",
    settings: "Settings",
    exit: "Exit Game",
    choose_language: "Choose language:",
    enter_choice: "Enter your choice: ",
    language_changed: "Language changed.",
    return_to_menu: "Press Enter to return to the menu...",
    current_game_board: "Current game board:",
    current_player: "Current player is",
    place_mark: "Place your mark at (row col): ",
    winner: "The winner is player",
    draw: "It's a draw!",
    game_over: "GAME OVER",
    play_again_question: "Play again? (y/n) ",
    confirm: "y",
};

/// Norwegian strings.
pub static NORWEGIAN: Dictionary = Dictionary {
    menu_title: "MENY",
    play_pvp: "Spill (PvP)",
    play_pvc: "Spill mot datamaskinen (PvC)",
    settings: "Innstillinger",
    exit: "Avslutt spillet",
    choose_language: "Velg språk:",
    enter_choice: "Skriv inn valget ditt: ",
    language_changed: "Språket er endret.",
    return_to_menu: "Trykk Enter for å gå tilbake til menyen...",
    current_game_board: "Nåværende spillbrett:",
    current_player: "Nåværende spiller er",
    place_mark: "Plasser merket ditt (rad kolonne): ",
    winner: "Vinneren er spiller",
    draw: "Uavgjort!",
    game_over: "SPILLET ER OVER",
    play_again_question: "Spille igjen? (j/n) ",
    confirm: "j",
};
