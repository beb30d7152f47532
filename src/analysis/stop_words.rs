//! Stop word set.
//!
//! Stop words are excluded from both indexing and querying. The set is built
//! once when the server is constructed and never changes afterwards.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::stop_words::StopWords;
//!
//! let stop_words = StopWords::from_text("and in on").unwrap();
//! assert!(stop_words.contains("and"));
//! assert!(!stop_words.contains("cat"));
//!
//! let stop_words = StopWords::from_words(vec!["the", "a"]).unwrap();
//! assert_eq!(stop_words.len(), 2);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::tokenizer::split_into_words;
use crate::analysis::validation::validate_word;
use crate::error::Result;

/// An immutable set of stop words.
#[derive(Clone, Debug, Default)]
pub struct StopWords {
    words: Arc<HashSet<String>>,
}

impl StopWords {
    /// Create an empty stop word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from space-separated text.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_into_words(text))
    }

    /// Build the set from any collection of words.
    ///
    /// Every word is validated; a word with a control character fails the
    /// whole construction. Empty words are skipped.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            validate_word(word)?;
            if !word.is_empty() {
                set.insert(word.to_string());
            }
        }

        Ok(StopWords {
            words: Arc::new(set),
        })
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stop words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let stop_words = StopWords::from_text("  and in   on ").unwrap();
        assert_eq!(stop_words.len(), 3);
        assert!(stop_words.contains("in"));
        assert!(!stop_words.contains(""));
    }

    #[test]
    fn test_from_words_deduplicates() {
        let stop_words = StopWords::from_words(["a", "a", "the"]).unwrap();
        assert_eq!(stop_words.len(), 2);
    }

    #[test]
    fn test_from_owned_strings() {
        let words = vec!["x".to_string(), "y".to_string()];
        let stop_words = StopWords::from_words(&words).unwrap();
        assert!(stop_words.contains("x"));
        assert!(stop_words.contains("y"));
    }

    #[test]
    fn test_invalid_stop_word_is_rejected() {
        let err = StopWords::from_words(["ok", "bad\u{7}"]).unwrap_err();
        assert!(err.is_invalid_argument());

        assert!(StopWords::from_text("in\u{1f}on").is_err());
    }

    #[test]
    fn test_empty_text_gives_empty_set() {
        let stop_words = StopWords::from_text("").unwrap();
        assert!(stop_words.is_empty());
    }
}
