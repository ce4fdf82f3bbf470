use std::io::{self, BufRead, StdinLock, Write};

use crate::controller::Confirm;
use crate::error::Result;

/// Line-oriented prompts over any buffered reader.
pub struct Prompter<R> {
    input: R,
}

/// Prompter reading from the terminal.
pub fn stdin() -> Prompter<StdinLock<'static>> {
    Prompter::new(io::stdin().lock())
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Print `prompt` and read one line.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Anything but "y"/"yes" declines.
impl<R: BufRead> Confirm for Prompter<R> {
    fn confirm(&mut self, prompt: &str) -> bool {
        match self.read_line(&format!("{prompt} [y/N] ")) {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Confirms without asking, for `--yes`.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
