//! Game state machine
//!
//! Tracks the attempt counter and outcome for one secret word. Guesses are
//! validated for length and list membership before they are scored; rejected
//! guesses never consume an attempt.

use crate::core::{Feedback, Word};
use crate::wordlists::WordList;

/// Why a game ended without a win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// Every allowed guess was scored without a match
    AttemptsExhausted,
    /// The input stream closed before the game finished
    InputExhausted,
    /// Too many consecutive guesses were rejected
    TooManyRetries,
}

/// Current state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the guess with this 1-based attempt number
    AwaitingGuess(usize),
    Won { attempts: usize },
    Lost(LossReason),
}

impl GameState {
    /// Check whether the game has reached a terminal state
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess(_))
    }
}

/// Reasons a guess is refused without being scored
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("Guess must be {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },

    #[error("The word is not in list.")]
    NotInList(String),

    #[error("The game is already over")]
    GameOver,
}

/// One game against a fixed secret word
#[derive(Debug)]
pub struct Game<'a> {
    words: &'a WordList,
    secret: &'a Word,
    state: GameState,
    history: Vec<(Word, Feedback)>,
}

impl<'a> Game<'a> {
    /// Start a game; `secret` should come from `words`
    #[must_use]
    pub fn new(words: &'a WordList, secret: &'a Word) -> Self {
        debug_assert_eq!(secret.len(), words.word_length());
        Self {
            words,
            secret,
            state: GameState::AwaitingGuess(1),
            history: Vec::with_capacity(words.word_length() + 1),
        }
    }

    /// Current state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        self.secret
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.words.word_length()
    }

    /// Allowed scored guesses: one more than the word length
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.word_length() + 1
    }

    /// Number of guesses scored so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Scored guesses in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Check whether the game has ended
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Validate and score a guess
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidLength` or `GuessError::NotInList` for
    /// guesses that must be re-prompted, and `GuessError::GameOver` once the
    /// game has ended. None of these consume an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<Feedback, GuessError> {
        let GameState::AwaitingGuess(attempt) = self.state else {
            return Err(GuessError::GameOver);
        };

        let found = guess.chars().count();
        if found != self.word_length() {
            return Err(GuessError::InvalidLength {
                expected: self.word_length(),
                found,
            });
        }

        let words = self.words;
        let Some(word) = words.lookup(guess) else {
            return Err(GuessError::NotInList(guess.to_string()));
        };

        let feedback = Feedback::calculate(word, self.secret).map_err(|_| {
            GuessError::InvalidLength {
                expected: self.word_length(),
                found,
            }
        })?;
        log::debug!("attempt {attempt}: {word} -> {}", feedback.to_emoji());

        self.history.push((word.clone(), feedback.clone()));

        self.state = if feedback.is_solved() {
            GameState::Won { attempts: attempt }
        } else if attempt >= self.max_attempts() {
            GameState::Lost(LossReason::AttemptsExhausted)
        } else {
            GameState::AwaitingGuess(attempt + 1)
        };

        if self.is_over() {
            log::info!("game over after {attempt} attempts: {:?}", self.state);
        }

        Ok(feedback)
    }

    /// End an unfinished game as a loss
    pub fn abandon(&mut self, reason: LossReason) {
        if !self.is_over() {
            log::info!("game abandoned: {reason:?}");
            self.state = GameState::Lost(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::testing::sample_list;

    fn list() -> WordList {
        sample_list(5, &["crane", "trace", "apple", "paper", "geese"])
    }

    fn secret(words: &WordList, text: &str) -> Word {
        words.lookup(text).unwrap().clone()
    }

    #[test]
    fn new_game_awaits_first_guess() {
        let words = list();
        let target = secret(&words, "crane");
        let game = Game::new(&words, &target);

        assert_eq!(game.state(), GameState::AwaitingGuess(1));
        assert_eq!(game.max_attempts(), 6);
        assert_eq!(game.attempts_used(), 0);
        assert!(!game.is_over());
    }

    #[test]
    fn correct_guess_wins() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        let feedback = game.submit("CRANE").unwrap();
        assert!(feedback.is_solved());
        assert_eq!(game.state(), GameState::Won { attempts: 1 });
        assert!(game.is_over());
    }

    #[test]
    fn wrong_guess_advances_attempt() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        let feedback = game.submit("trace").unwrap();
        assert_eq!(
            feedback.statuses(),
            &[
                LetterStatus::Wrong,
                LetterStatus::Exact,
                LetterStatus::Exact,
                LetterStatus::Close,
                LetterStatus::Exact
            ]
        );
        assert_eq!(game.state(), GameState::AwaitingGuess(2));
        assert_eq!(game.history()[0].0.text(), "trace");
    }

    #[test]
    fn invalid_length_consumes_no_attempt() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        assert_eq!(
            game.submit("cranes"),
            Err(GuessError::InvalidLength {
                expected: 5,
                found: 6
            })
        );
        assert_eq!(game.state(), GameState::AwaitingGuess(1));
        assert_eq!(game.attempts_used(), 0);
    }

    #[test]
    fn unknown_word_consumes_no_attempt() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        assert_eq!(
            game.submit("slate"),
            Err(GuessError::NotInList("slate".to_string()))
        );
        assert_eq!(game.state(), GameState::AwaitingGuess(1));
        assert!(game.history().is_empty());
    }

    #[test]
    fn loses_after_exactly_length_plus_one_misses() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        for attempt in 1..=6 {
            assert_eq!(game.state(), GameState::AwaitingGuess(attempt));
            game.submit("apple").unwrap();
        }

        assert_eq!(game.state(), GameState::Lost(LossReason::AttemptsExhausted));
        assert_eq!(game.attempts_used(), 6);
        assert_eq!(game.submit("crane"), Err(GuessError::GameOver));
        assert_eq!(game.attempts_used(), 6);
    }

    #[test]
    fn win_on_last_attempt() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        for _ in 0..5 {
            game.submit("paper").unwrap();
        }
        game.submit("crane").unwrap();
        assert_eq!(game.state(), GameState::Won { attempts: 6 });
    }

    #[test]
    fn longer_words_get_more_attempts() {
        let words = sample_list(8, &["absolute"]);
        let target = secret(&words, "absolute");
        let game = Game::new(&words, &target);
        assert_eq!(game.max_attempts(), 9);
    }

    #[test]
    fn abandon_marks_loss_once() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        game.abandon(LossReason::InputExhausted);
        assert_eq!(game.state(), GameState::Lost(LossReason::InputExhausted));

        game.abandon(LossReason::TooManyRetries);
        assert_eq!(game.state(), GameState::Lost(LossReason::InputExhausted));
    }

    #[test]
    fn abandon_after_win_keeps_win() {
        let words = list();
        let target = secret(&words, "crane");
        let mut game = Game::new(&words, &target);

        game.submit("crane").unwrap();
        game.abandon(LossReason::InputExhausted);
        assert_eq!(game.state(), GameState::Won { attempts: 1 });
    }
}
