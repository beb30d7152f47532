//! Query parser for converting raw query text into a [`Query`].
//!
//! Supported syntax is a space-separated list of words:
//! - `word` - plus word, contributes to relevance
//! - `-word` - minus word, excludes every document containing it
//!
//! A lone `-`, a word starting with `--` and any control character fail the
//! whole query with `InvalidArgument`. Stop words and empty tokens are
//! ignored.

use rayon::prelude::*;

use crate::analysis::stop_words::StopWords;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::validation::validate_word;
use crate::error::{PikeError, Result};
use crate::query::query::{Query, QueryWord};
use crate::search::config::ExecutionMode;

/// Parses query text against a stop word set.
#[derive(Clone, Copy)]
pub struct QueryParser<'a> {
    stop_words: &'a StopWords,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> QueryParser<'a> {
    /// Create a parser that splits with `tokenizer` and drops the given
    /// stop words.
    pub fn new(stop_words: &'a StopWords, tokenizer: &'a dyn Tokenizer) -> Self {
        QueryParser {
            stop_words,
            tokenizer,
        }
    }

    /// Parse a query string.
    ///
    /// In parallel mode tokens are classified on the current rayon pool and
    /// the partial queries are reduced into one. Both modes return the same
    /// query, and on invalid input both report the first offending token.
    pub fn parse(&self, text: &str, mode: ExecutionMode) -> Result<Query> {
        match mode {
            ExecutionMode::Sequential => {
                let mut query = Query::new();
                for token in self.tokenizer.tokenize(text) {
                    query.push(self.parse_query_word(token)?);
                }
                Ok(query)
            }
            ExecutionMode::Parallel => {
                let tokens: Vec<&str> = self.tokenizer.tokenize(text).collect();
                let classified: Vec<Result<QueryWord<'_>>> = tokens
                    .par_iter()
                    .map(|&token| self.parse_query_word(token))
                    .collect();
                // Sequential collect keeps the first error in input order.
                let words = classified.into_iter().collect::<Result<Vec<_>>>()?;

                Ok(words
                    .into_par_iter()
                    .fold(Query::new, |mut query, word| {
                        query.push(word);
                        query
                    })
                    .reduce(Query::new, Query::merge))
            }
        }
    }

    /// Classify a single token.
    pub fn parse_query_word<'t>(&self, token: &'t str) -> Result<QueryWord<'t>> {
        validate_word(token)?;

        if token.is_empty() {
            return Ok(QueryWord {
                data: token,
                is_minus: false,
                is_stop: true,
            });
        }
        if token == "-" {
            return Err(PikeError::invalid_argument("no word after minus"));
        }

        let (data, is_minus) = match token.strip_prefix('-') {
            Some(rest) if rest.starts_with('-') => {
                return Err(PikeError::invalid_argument(format!(
                    "double minus in word {token:?}"
                )));
            }
            Some(rest) => (rest, true),
            None => (token, false),
        };

        Ok(QueryWord {
            data,
            is_minus,
            is_stop: self.stop_words.contains(data),
        })
    }
}
