//! WORDLE50
//!
//! A terminal word-guessing game for words of 5 to 8 letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle50::core::{Feedback, LetterStatus, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret).unwrap();
//! assert_eq!(feedback.statuses()[1], LetterStatus::Exact);
//! assert!(!feedback.is_solved());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Game engine and input loop
pub mod game;

// Terminal output formatting
pub mod output;
