//! Menu controller: the outer loop of the program.

use super::choice::MenuChoice;
use super::settings::MenuSettings;
use crate::console::Prompter;
use crate::language::Language;
use crate::mode::GameMode;
use crate::orchestrator::Orchestrator;
use anyhow::Result;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Shows the main menu and dispatches the chosen entry until Exit.
pub struct MenuController<'a> {
    io: &'a mut dyn Prompter,
    settings: MenuSettings,
    sessions: u64,
}

impl<'a> MenuController<'a> {
    /// Creates a new menu controller.
    #[instrument(skip(io))]
    pub fn new(io: &'a mut dyn Prompter, settings: MenuSettings) -> Self {
        info!("Creating MenuController");
        Self {
            io,
            settings,
            sessions: 0,
        }
    }

    /// Current settings, including any language change made in the menu.
    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    /// Runs the menu loop until the user picks Exit.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting menu loop");
        loop {
            match self.show_menu()? {
                MenuChoice::PlayPvp => self.run_mode(GameMode::PlayerVsPlayer)?,
                MenuChoice::PlayPvc => self.run_mode(GameMode::PlayerVsComputer)?,
                MenuChoice::Settings => self.show_settings()?,
                MenuChoice::Exit => {
                    self.io.clear_screen()?;
                    info!("Exit chosen");
                    return Ok(());
                }
            }
        }
    }

    /// Prints the menu until the answer is one of the menu codes.
    fn show_menu(&mut self) -> Result<MenuChoice> {
        let dictionary = self.settings.dictionary();
        loop {
            self.io.clear_screen()?;
            self.io.print(dictionary.menu_title)?;
            for choice in MenuChoice::iter() {
                self.io
                    .print(&format!("{}. {}", choice.code(), choice.label(dictionary)))?;
            }

            let answer = self.io.ask("")?;
            match MenuChoice::from_input(&answer) {
                Some(choice) => {
                    debug!(?choice, "Menu choice");
                    return Ok(choice);
                }
                None => debug!(answer = %answer, "Unrecognized menu choice"),
            }
        }
    }

    /// Language selection. Answers other than a listed number keep the
    /// current language.
    #[instrument(skip(self), fields(language = %self.settings.language))]
    fn show_settings(&mut self) -> Result<()> {
        self.io.clear_screen()?;
        self.io.print(self.settings.dictionary().choose_language)?;
        for language in Language::iter() {
            self.io.print(&format!("{}. {}", language.code(), language))?;
        }

        let answer = self.io.ask(self.settings.dictionary().enter_choice)?;
        if let Some(language) = Language::from_choice(&answer) {
            info!(%language, "Language selected");
            self.settings.language = language;
        }

        let dictionary = self.settings.dictionary();
        self.io.print(dictionary.language_changed)?;
        self.io.ask(dictionary.return_to_menu)?;
        Ok(())
    }

    /// Runs one session of rounds in `mode`.
    #[instrument(skip(self))]
    fn run_mode(&mut self, mode: GameMode) -> Result<()> {
        let seed = self
            .settings
            .seed
            .map(|seed| seed.wrapping_add(self.sessions));
        self.sessions += 1;

        let (player_x, player_o) = mode.players(seed);
        let summary = Orchestrator::new(
            player_x,
            player_o,
            &mut *self.io,
            self.settings.dictionary(),
            self.settings.color,
        )
        .run_session()?;
        info!(%mode, rounds = summary.rounds(), "Returning to menu");
        Ok(())
    }
}
