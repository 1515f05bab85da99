//! Line-based guess input

use std::io::{self, BufRead, Write};

/// Consecutive rejected lines tolerated before a game is abandoned
pub const DEFAULT_MAX_RETRIES: usize = 32;

/// Errors raised while reading a guess
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("Failed to read guess")]
    Io(#[from] io::Error),

    #[error("Gave up after {0} lines of the wrong length")]
    TooManyRetries(usize),
}

/// Source of player guesses
pub trait GuessPrompt {
    /// Read a guess of exactly `length` characters
    ///
    /// Returns `Ok(None)` when input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if reading fails or the retry limit is hit.
    fn read_guess(&mut self, length: usize) -> Result<Option<String>, PromptError>;
}

/// Prompts on a writer and reads lines from a reader
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    max_retries: usize,
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout, read from stdin
    #[must_use]
    pub fn stdio(max_retries: usize) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), max_retries)
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W, max_retries: usize) -> Self {
        Self {
            input,
            output,
            max_retries,
        }
    }

    /// Recover the writer, e.g. to inspect captured prompts
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> GuessPrompt for LinePrompt<R, W> {
    fn read_guess(&mut self, length: usize) -> Result<Option<String>, PromptError> {
        let mut rejected = 0;

        loop {
            write!(self.output, "Input a {length}-letter word: ")?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                log::debug!("input exhausted");
                return Ok(None);
            }

            // Undecodable bytes become U+FFFD and fail the list lookup later
            let line = String::from_utf8_lossy(&buf);
            let guess = strip_line_ending(&line);
            if guess.chars().count() == length {
                return Ok(Some(guess.to_string()));
            }

            rejected += 1;
            if rejected > self.max_retries {
                return Err(PromptError::TooManyRetries(rejected));
            }
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
