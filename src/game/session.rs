//! Interactive game loop
//!
//! Reads guesses from a [`GuessPrompt`], feeds them to a [`Game`] and renders
//! the results until the game ends.

use super::engine::{Game, GameState, GuessError, LossReason};
use super::prompt::{GuessPrompt, PromptError};
use crate::output::Renderer;
use std::io::{self, Write};

/// Play `game` to completion
///
/// End of input and runs of more than `max_retries` rejected guesses end the
/// game as a loss rather than an error.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing output fails.
pub fn play<P, W>(
    game: &mut Game<'_>,
    prompt: &mut P,
    renderer: &mut Renderer<W>,
    max_retries: usize,
) -> io::Result<GameState>
where
    P: GuessPrompt,
    W: Write,
{
    renderer.banner(game.max_attempts(), game.word_length())?;

    let mut rejected = 0;

    while let GameState::AwaitingGuess(attempt) = game.state() {
        let line = match prompt.read_guess(game.word_length()) {
            Ok(Some(line)) => line,
            Ok(None) => {
                game.abandon(LossReason::InputExhausted);
                break;
            }
            Err(PromptError::TooManyRetries(count)) => {
                log::warn!("abandoning game after {count} malformed lines");
                game.abandon(LossReason::TooManyRetries);
                break;
            }
            Err(PromptError::Io(e)) => return Err(e),
        };

        match game.submit(&line) {
            Ok(feedback) => {
                rejected = 0;
                if let Some((word, _)) = game.history().last() {
                    renderer.guess(attempt, word, &feedback)?;
                }
            }
            Err(GuessError::NotInList(guess)) => {
                log::debug!("rejected '{guess}': not in list");
                renderer.not_in_list()?;
                rejected += 1;
            }
            Err(GuessError::InvalidLength { expected, found }) => {
                log::debug!("rejected guess of {found} letters, expected {expected}");
                rejected += 1;
            }
            Err(GuessError::GameOver) => break,
        }

        if rejected > max_retries {
            log::warn!("abandoning game after {rejected} rejected guesses");
            game.abandon(LossReason::TooManyRetries);
        }
    }

    renderer.summary(game)?;
    Ok(game.state())
}
