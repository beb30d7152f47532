//! Whitespace tokenizer.
//!
//! [`split_into_words`] breaks text on the ASCII space character and yields
//! borrowed slices of the input. The returned [`Words`] iterator is lazy and
//! cheap to clone, so a caller can walk the same text more than once without
//! re-tokenizing into an intermediate buffer.
//!
//! # Examples
//!
//! ```
//! use pike::analysis::tokenizer::split_into_words;
//!
//! let words: Vec<_> = split_into_words("  fluffy   cat ").collect();
//! assert_eq!(words, vec!["fluffy", "cat"]);
//! ```
//!
//! The same splitting is available behind the [`Tokenizer`] trait:
//!
//! ```
//! use pike::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! assert_eq!(tokenizer.tokenize("groomed dog").count(), 2);
//! assert_eq!(tokenizer.name(), "whitespace");
//! ```

use std::iter::FusedIterator;

/// Delimiter between words.
const DELIMITER: char = ' ';

/// Lazy iterator over the space-delimited words of a text.
///
/// Runs of spaces collapse into one delimiter and leading or trailing spaces
/// produce nothing. A completely empty input yields a single empty word;
/// callers that index words are expected to drop it.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    rest: &'a str,
    pending_empty: bool,
}

impl<'a> Words<'a> {
    fn new(text: &'a str) -> Self {
        Words {
            rest: text,
            pending_empty: text.is_empty(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.pending_empty {
            self.pending_empty = false;
            return Some("");
        }

        let trimmed = self.rest.trim_start_matches(DELIMITER);
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        let end = trimmed.find(DELIMITER).unwrap_or(trimmed.len());
        let (word, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(word)
    }
}

impl FusedIterator for Words<'_> {}

/// Split `text` into space-delimited words.
pub fn split_into_words(text: &str) -> Words<'_> {
    Words::new(text)
}

/// Trait for tokenizers that break text into borrowed words.
///
/// Tokenizers only split; validation and stop word filtering happen in the
/// caller.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into words.
    fn tokenize<'a>(&self, text: &'a str) -> Words<'a>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on the space character.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Words<'a> {
        split_into_words(text)
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
