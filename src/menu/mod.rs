//! Main menu: mode selection, settings and exit.

mod choice;
mod controller;
mod settings;

pub use choice::MenuChoice;
pub use controller::MenuController;
pub use settings::MenuSettings;
