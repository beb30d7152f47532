//! Parsed query representation.

use std::collections::BTreeSet;

/// A parsed query: words that must match and words that exclude.
///
/// Both sets de-duplicate, so a repeated token is a single membership test.
/// A word may end up in both sets (`cat -cat`); exclusion wins, a document
/// containing it is never returned and never reports matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    /// Words contributing to relevance.
    pub plus_words: BTreeSet<String>,
    /// Words excluding any document that contains them.
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a classified word; stop words are ignored.
    pub fn push(&mut self, word: QueryWord<'_>) {
        if word.is_stop {
            return;
        }
        let target = if word.is_minus {
            &mut self.minus_words
        } else {
            &mut self.plus_words
        };
        target.insert(word.data.to_string());
    }

    /// Union of two queries.
    pub fn merge(mut self, other: Query) -> Query {
        self.plus_words.extend(other.plus_words);
        self.minus_words.extend(other.minus_words);
        self
    }

    /// True if the query has no plus and no minus words.
    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// One classified query token, borrowing from the query text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryWord<'a> {
    /// The word with any leading minus stripped.
    pub data: &'a str,
    /// Token was prefixed with a single `-`.
    pub is_minus: bool,
    /// Word is a stop word (or empty) and takes no part in the query.
    pub is_stop: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(data: &str, is_minus: bool, is_stop: bool) -> QueryWord<'_> {
        QueryWord {
            data,
            is_minus,
            is_stop,
        }
    }

    #[test]
    fn test_push_classifies_words() {
        let mut query = Query::new();
        query.push(word("cat", false, false));
        query.push(word("collar", true, false));
        query.push(word("and", false, true));
        query.push(word("cat", false, false));

        assert_eq!(query.plus_words.len(), 1);
        assert!(query.plus_words.contains("cat"));
        assert!(query.minus_words.contains("collar"));
        assert!(!query.is_empty());
    }

    #[test]
    fn test_merge() {
        let mut left = Query::new();
        left.push(word("a", false, false));
        let mut right = Query::new();
        right.push(word("b", false, false));
        right.push(word("a", true, false));

        let merged = left.merge(right);
        assert_eq!(merged.plus_words.len(), 2);
        assert_eq!(merged.minus_words.len(), 1);
    }
}
