//! Line-oriented prompts over any reader and writer.

use core::fmt::Display;
use std::io::{self, BufRead, Write};

/// Words that back out of the current prompt.
pub const QUIT_WORDS: [&str; 3] = ["quit", "q", "exit"];

/// Returns whether `input` asks to quit.
#[must_use]
pub fn is_quit(input: &str) -> bool {
    QUIT_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(input.trim()))
}

/// Prompt helper wrapping the game's input and output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` and reads one trimmed line.
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
