//! Word list loading utilities
//!
//! Lists live in plain text files named after their word length (`5.txt`,
//! `6.txt`, ...) holding whitespace-delimited words.

use super::list::{LIST_SIZE, WordList};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while loading a word list
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("No word list found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list must contain exactly {expected} words, found {found}")]
    WrongWordCount { expected: usize, found: usize },

    #[error("Entry {position} ('{token}') is not a {length}-letter word")]
    MalformedWord {
        position: usize,
        token: String,
        length: usize,
    },
}

/// Path of the list for words of `length` letters inside `dir`
#[must_use]
pub fn path_for<P: AsRef<Path>>(dir: P, length: usize) -> PathBuf {
    dir.as_ref().join(format!("{length}.txt"))
}

/// Load the list of `length`-letter words from `dir`
///
/// # Errors
///
/// Returns `WordListError::NotFound` if the file does not exist,
/// `WordListError::Io` if it cannot be read, and a format error if it does
/// not start with [`LIST_SIZE`] valid words.
///
/// # Examples
/// ```no_run
/// use wordle50::wordlists::load;
///
/// let words = load("data", 5).unwrap();
/// assert_eq!(words.word_length(), 5);
/// ```
pub fn load<P: AsRef<Path>>(dir: P, length: usize) -> Result<WordList, WordListError> {
    let path = path_for(dir, length);
    log::debug!("loading word list from {}", path.display());

    let content = fs::read_to_string(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            WordListError::NotFound { path: path.clone() }
        } else {
            WordListError::Io {
                path: path.clone(),
                source,
            }
        }
    })?;

    let list = parse(&content, length)?;
    log::info!(
        "loaded {} {length}-letter words from {}",
        list.words().len(),
        path.display()
    );
    Ok(list)
}

/// Parse the first [`LIST_SIZE`] whitespace-delimited tokens of `content`
///
/// Tokens past the first [`LIST_SIZE`] are ignored.
///
/// # Errors
///
/// Returns `WordListError::WrongWordCount` if fewer tokens are present, or
/// `WordListError::MalformedWord` for the first token that is not an
/// ASCII-letter word of `length` letters.
pub fn parse(content: &str, length: usize) -> Result<WordList, WordListError> {
    let words = content
        .split_whitespace()
        .take(LIST_SIZE)
        .enumerate()
        .map(|(position, token)| {
            Word::with_length(token, length).map_err(|_| WordListError::MalformedWord {
                position,
                token: token.to_string(),
                length,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    WordList::new(length, words)
}
