//! Menu settings: user-configurable preferences for the program run.

use crate::language::{Dictionary, Language};

/// Settings the menu carries between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSettings {
    /// Active interface language.
    pub language: Language,
    /// Draw marks in color.
    pub color: bool,
    /// Seed for the computer opponent.
    pub seed: Option<u64>,
}

impl MenuSettings {
    /// Active string table.
    pub fn dictionary(&self) -> &'static Dictionary {
        self.language.dictionary()
    }
}
