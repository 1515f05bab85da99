//! Game display
//!
//! Writes the banner, per-guess feedback and the final summary.

use super::formatters::{format_guess, title};
use crate::core::{Feedback, Word};
use crate::game::{Game, GameState, LossReason};
use std::io::{self, Write};

/// Renders game events to a writer
pub struct Renderer<W> {
    out: W,
}

impl Renderer<io::Stdout> {
    /// Render to stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Renderer<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the opening banner
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn banner(&mut self, max_attempts: usize, length: usize) -> io::Result<()> {
        writeln!(self.out, "{}", title("This is WORDLE50"))?;
        writeln!(
            self.out,
            "You have {max_attempts} tries to guess the {length}-letter word I'm thinking of"
        )
    }

    /// Print one scored guess
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn guess(&mut self, attempt: usize, word: &Word, feedback: &Feedback) -> io::Result<()> {
        writeln!(self.out, "Guess {attempt}: {}", format_guess(word, feedback))
    }

    /// Report a guess missing from the word list
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn not_in_list(&mut self) -> io::Result<()> {
        writeln!(self.out, "The word is not in list.")
    }

    /// Print the outcome and the guess history
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn summary(&mut self, game: &Game<'_>) -> io::Result<()> {
        match game.state() {
            GameState::Won { .. } => writeln!(self.out, "You won!")?,
            GameState::Lost(reason) => {
                match reason {
                    LossReason::InputExhausted => writeln!(self.out, "\nNo more input.")?,
                    LossReason::TooManyRetries => writeln!(self.out, "\nToo many invalid guesses.")?,
                    LossReason::AttemptsExhausted => {}
                }
                writeln!(self.out, "The target word was: {}", game.secret())?;
            }
            GameState::AwaitingGuess(_) => return Ok(()),
        }

        if !game.history().is_empty() {
            writeln!(self.out)?;
            for (word, feedback) in game.history() {
                writeln!(self.out, "{} {}", feedback.to_emoji(), word.text().to_uppercase())?;
            }
        }

        self.out.flush()
    }
}
