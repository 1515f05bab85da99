//! Per-letter feedback for a guess
//!
//! Each guessed letter gets one of three statuses:
//! - 2 = Exact (right letter, right place)
//! - 1 = Close (letter appears elsewhere in the secret)
//! - 0 = Wrong (letter not matched)
//!
//! Scoring does not cap feedback by letter multiplicity: every guessed letter
//! that appears anywhere in the secret is at least Close, even when the secret
//! holds fewer copies of it than the guess does.

use super::{Word, WordError};

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Wrong,
    Close,
    Exact,
}

impl LetterStatus {
    /// Numeric code (Exact=2, Close=1, Wrong=0)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Wrong => 0,
            Self::Close => 1,
            Self::Exact => 2,
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Close => '🟨',
            Self::Wrong => '🟥',
        }
    }
}

/// Feedback for one guess: one status per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterStatus>);

// Feedback always covers a whole word
#[allow(clippy::len_without_is_empty)]
impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Every position starts Wrong
    /// 2. For each guess position, scan all secret positions: a match at the
    ///    same index sets Exact, a match elsewhere sets Close unless already Exact
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle50::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("geese").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret).unwrap();
    ///
    /// assert_eq!(feedback.statuses(), &[Wrong, Close, Close, Wrong, Exact]);
    /// ```
    pub fn calculate(guess: &Word, secret: &Word) -> Result<Self, WordError> {
        if guess.len() != secret.len() {
            return Err(WordError::LengthMismatch {
                expected: secret.len(),
                found: guess.len(),
            });
        }

        let mut statuses = vec![LetterStatus::Wrong; guess.len()];

        for (i, (&letter, status)) in guess.chars().iter().zip(statuses.iter_mut()).enumerate() {
            for (j, &target) in secret.chars().iter().enumerate() {
                if target != letter {
                    continue;
                }
                if i == j {
                    *status = LetterStatus::Exact;
                } else if *status != LetterStatus::Exact {
                    *status = LetterStatus::Close;
                }
            }
        }

        Ok(Self(statuses))
    }

    /// Statuses in letter order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Number of letters scored
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if every letter is Exact
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterStatus::Exact)
    }

    /// Sum of numeric status codes
    #[must_use]
    pub fn score(&self) -> usize {
        self.0.iter().map(|s| usize::from(s.code())).sum()
    }

    /// Convert feedback to an emoji string like "🟥🟩🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}
