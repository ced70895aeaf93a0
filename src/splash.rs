//! Startup banner.

use crate::console::Prompter;
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, instrument};

/// Banner printed before the first menu.
pub const SPLASH: &str = r"
 _____ _        _____            _____
|_   _(_) ___  |_   _|_ _  ___  |_   _|__   ___
  | | | |/ __|   | |/ _` |/ __|   | |/ _ \ / _ \
  | | | | (__    | | (_| | (__    | | (_) |  __/
  |_| |_|\___|   |_|\__,_|\___|   |_| \___/ \___|
";

/// Prints the banner, then waits `delay` before returning.
#[instrument(skip(io))]
pub fn show_splash(io: &mut dyn Prompter, delay: Duration) -> Result<()> {
    io.clear_screen()?;
    io.print(SPLASH)?;
    debug!("Splash shown");
    std::thread::sleep(delay);
    Ok(())
}
