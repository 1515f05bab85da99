//! Core domain types for the game
//!
//! Words and per-letter feedback. Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus};
pub use word::{MAX_LENGTH, MIN_LENGTH, Word, WordError, is_valid_length};
