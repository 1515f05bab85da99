//! Game engine and interactive loop

mod engine;
pub mod prompt;
pub mod session;

pub use engine::{Game, GameState, GuessError, LossReason};
pub use prompt::{DEFAULT_MAX_RETRIES, GuessPrompt, LinePrompt, PromptError};
pub use session::play;
