//! Fixed-size word list with membership lookup and secret selection

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashMap;

use super::loader::WordListError;

/// Number of words in every list
pub const LIST_SIZE: usize = 1000;

/// Immutable list of exactly [`LIST_SIZE`] words of a single length
#[derive(Debug, Clone)]
pub struct WordList {
    length: usize,
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
}

impl WordList {
    /// Build a list from already-validated words
    ///
    /// # Errors
    /// Returns `WordListError::WrongWordCount` unless exactly [`LIST_SIZE`] words
    /// are given, or `WordListError::MalformedWord` if any word has the wrong
    /// length.
    pub fn new(length: usize, words: Vec<Word>) -> Result<Self, WordListError> {
        if words.len() != LIST_SIZE {
            return Err(WordListError::WrongWordCount {
                expected: LIST_SIZE,
                found: words.len(),
            });
        }

        if let Some((position, word)) = words.iter().enumerate().find(|(_, w)| w.len() != length) {
            return Err(WordListError::MalformedWord {
                position,
                token: word.text().to_string(),
                length,
            });
        }

        let mut index = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            index.entry(word.text().to_string()).or_insert(i);
        }

        Ok(Self {
            length,
            words,
            index,
        })
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// All words in file order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.lookup(candidate).is_some()
    }

    /// Find the list entry matching `candidate`, ignoring case
    #[must_use]
    pub fn lookup(&self, candidate: &str) -> Option<&Word> {
        if candidate.len() != self.length {
            return None;
        }
        self.index
            .get(&candidate.to_ascii_lowercase())
            .map(|&i| &self.words[i])
    }

    /// Choose the secret word uniformly at random
    ///
    /// # Examples
    /// ```no_run
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle50::wordlists::load;
    ///
    /// let list = load(".", 5).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let secret = list.pick_secret(&mut rng);
    /// assert!(list.contains(secret.text()));
    /// ```
    pub fn pick_secret<R: Rng>(&self, rng: &mut R) -> &Word {
        // A constructed list always holds LIST_SIZE words
        let index = rng.random_range(0..self.words.len());
        log::debug!("selected secret at index {index}");
        &self.words[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::testing::sample_list;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn list_reports_length_and_size() {
        let list = sample_list(6, &["planet"]);
        assert_eq!(list.word_length(), 6);
        assert_eq!(list.words().len(), LIST_SIZE);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let list = sample_list(5, &["crane", "trace"]);
        assert!(list.contains("crane"));
        assert!(list.contains("CRANE"));
        assert!(list.contains("TrAcE"));
        assert!(!list.contains("slate"));
    }

    #[test]
    fn contains_rejects_other_lengths() {
        let list = sample_list(5, &["crane"]);
        assert!(!list.contains("cranes"));
        assert!(!list.contains(""));
    }

    #[test]
    fn lookup_returns_list_entry() {
        let list = sample_list(5, &["crane"]);
        assert_eq!(list.lookup("Crane").map(Word::text), Some("crane"));
        assert!(list.lookup("zzzzq").is_none());
    }

    #[test]
    fn new_rejects_wrong_count() {
        let words = vec![Word::new("crane").unwrap(); 999];
        assert!(matches!(
            WordList::new(5, words),
            Err(WordListError::WrongWordCount {
                expected: 1000,
                found: 999
            })
        ));
    }

    #[test]
    fn new_rejects_too_many_words() {
        let words = vec![Word::new("crane").unwrap(); LIST_SIZE + 1];
        let err = WordList::new(5, words).unwrap_err();
        assert!(matches!(
            err,
            WordListError::WrongWordCount {
                expected: 1000,
                found: 1001
            }
        ));
        assert_eq!(
            err.to_string(),
            "Word list must contain exactly 1000 words, found 1001"
        );
    }

    #[test]
    fn new_rejects_mixed_lengths() {
        let mut words = vec![Word::new("crane").unwrap(); LIST_SIZE];
        words[42] = Word::new("planet").unwrap();
        assert!(matches!(
            WordList::new(5, words),
            Err(WordListError::MalformedWord { position: 42, .. })
        ));
    }

    #[test]
    fn pick_secret_is_deterministic_with_seed() {
        let list = sample_list(5, &[]);
        let first = list.pick_secret(&mut StdRng::seed_from_u64(42)).clone();
        let second = list.pick_secret(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
        assert!(list.contains(first.text()));
    }

    #[test]
    fn pick_secret_varies_across_draws() {
        let list = sample_list(5, &[]);
        let mut rng = StdRng::seed_from_u64(1);
        let draws: rustc_hash::FxHashSet<_> =
            (0..50).map(|_| list.pick_secret(&mut rng).clone()).collect();
        assert!(draws.len() > 1);
    }
}
