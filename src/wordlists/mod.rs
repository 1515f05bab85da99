//! Word lists for the game
//!
//! One list per word length, each holding exactly [`LIST_SIZE`] words.

mod list;
pub mod loader;

pub use list::{LIST_SIZE, WordList};
pub use loader::{WordListError, load};
