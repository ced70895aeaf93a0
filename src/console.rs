//! Line-based console I/O.
//!
//! Everything that talks to the terminal goes through [`Prompter`], so the
//! game loop can be driven by scripted input in tests.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use derive_more::{Display, Error};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// Console failure.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O error: {source} at {file}:{line}")]
    Io {
        /// Underlying I/O error.
        source: io::Error,
        /// Line number where error occurred.
        line: u32,
        /// Source file where error occurred.
        file: &'static str,
    },
    /// Input reached end of file.
    #[display("Console input closed")]
    InputClosed,
}

impl From<io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        let loc = std::panic::Location::caller();
        Self::Io {
            source: err,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Text output and blocking line input.
pub trait Prompter {
    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Writes `question` without a newline and blocks for one line of input.
    ///
    /// The returned line has its line terminator removed.
    fn ask(&mut self, question: &str) -> Result<String, ConsoleError>;

    /// Clears the screen.
    fn clear_screen(&mut self) -> Result<(), ConsoleError>;
}

/// [`Prompter`] over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. With `clear` off, [`Prompter::clear_screen`] does
    /// nothing.
    pub fn new(input: R, output: W, clear: bool) -> Self {
        Self {
            input,
            output,
            clear,
        }
    }

    /// Everything written so far, for writers that keep it.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio(clear: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear)
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn ask(&mut self, question: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("Input closed");
            return Err(ConsoleError::InputClosed);
        }
        // Bytes that are not UTF-8 become replacement characters, so a garbled
        // line fails to parse like any other bad answer.
        let line = String::from_utf8_lossy(&raw);
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(answer = %answer, "Read input line");
        Ok(answer)
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        if self.clear {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_strips_line_endings() {
        let mut console = Console::new(Cursor::new("1 2\r\nnext\n"), Vec::new(), false);
        assert_eq!(console.ask("? ").unwrap(), "1 2");
        assert_eq!(console.ask("? ").unwrap(), "next");
        assert_eq!(String::from_utf8_lossy(console.output()), "? ? ");
    }

    #[test]
    fn test_ask_tolerates_invalid_utf8() {
        let mut console = Console::new(Cursor::new(&b"\xff\xfe\n4\n"[..]), Vec::new(), false);
        let garbled = console.ask("? ").unwrap();
        assert!(garbled.contains('\u{FFFD}'));
        assert_eq!(console.ask("? ").unwrap(), "4");
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new(), false);
        assert!(matches!(console.ask("? "), Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn test_clear_disabled_writes_nothing() {
        let mut console = Console::new(Cursor::new(""), Vec::new(), false);
        console.clear_screen().unwrap();
        console.print("hello").unwrap();
        assert_eq!(String::from_utf8_lossy(console.output()), "hello\n");
    }
}
