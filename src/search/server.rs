//! The search server: document ingestion, ranked search, match explanation
//! and removal over one in-memory index.
//!
//! # Examples
//!
//! ```
//! use pike::document::DocumentStatus;
//! use pike::search::config::ExecutionMode;
//! use pike::search::server::SearchServer;
//!
//! let mut server = SearchServer::from_stop_words_text("and").unwrap();
//! server
//!     .add_document(0, "white cat and fancy collar", DocumentStatus::Actual, &[8, -3])
//!     .unwrap();
//! server
//!     .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
//!     .unwrap();
//!
//! let results = server.find_top_documents("fluffy cat -collar").unwrap();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].id, 1);
//!
//! let matched = server
//!     .match_document("fluffy tail", 1, ExecutionMode::Sequential)
//!     .unwrap();
//! assert_eq!(matched.words, vec!["fluffy", "tail"]);
//! ```

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::StopWords;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::analysis::validation::validate_word;
use crate::document::{
    Document, DocumentData, DocumentId, DocumentStatus, Rating, compute_average_rating,
};
use crate::error::{PikeError, Result};
use crate::index::inverted::{InvertedIndex, WordFrequencies};
use crate::query::parser::QueryParser;
use crate::query::query::Query;
use crate::search::config::{ExecutionMode, SearchServerConfig};
use crate::search::ranker::{DocumentPredicate, Ranker};

/// Outcome of [`SearchServer::match_document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedDocument {
    /// Plus words of the query found in the document, in query-set order.
    /// Empty if the document contains any minus word.
    pub words: Vec<String>,
    /// Status of the document.
    pub status: DocumentStatus,
}

/// In-memory TF-IDF search server.
///
/// Reads (`find_*`, `match_document`, lookups) take `&self` and may run
/// concurrently with each other. Mutations take `&mut self`, so they can
/// never overlap a read.
#[derive(Debug, Clone)]
pub struct SearchServer {
    /// Words ignored by indexing and querying.
    stop_words: StopWords,

    /// Splits document text into words.
    tokenizer: WhitespaceTokenizer,

    /// Forward/reverse index and document metadata.
    index: InvertedIndex,

    /// Configuration for the server.
    config: SearchServerConfig,

    /// Worker pool for parallel operations.
    thread_pool: Arc<ThreadPool>,
}

impl SearchServer {
    /// Create a server with the default configuration.
    pub fn new(stop_words: StopWords) -> Result<Self> {
        Self::with_config(stop_words, SearchServerConfig::default())
    }

    /// Create a server from space-separated stop words.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::new(StopWords::from_text(text)?)
    }

    /// Create a server from a collection of stop words.
    pub fn from_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(StopWords::from_words(words)?)
    }

    /// Create a server with an explicit configuration.
    pub fn with_config(stop_words: StopWords, config: SearchServerConfig) -> Result<Self> {
        config.validate()?;

        let thread_pool_size = config.effective_thread_pool_size();
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("pike-search-{i}"))
            .build()
            .map_err(|e| {
                PikeError::invalid_argument(format!("Failed to create thread pool: {e}"))
            })?;
        debug!(
            "search server ready: {} stop words, {} workers, {} accumulator shards",
            stop_words.len(),
            thread_pool_size,
            config.accumulator_shards
        );

        Ok(Self {
            stop_words,
            tokenizer: WhitespaceTokenizer::new(),
            index: InvertedIndex::new(),
            config,
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Stop words of this server.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Configuration of this server.
    pub fn config(&self) -> &SearchServerConfig {
        &self.config
    }

    /// Add a document.
    ///
    /// Fails with `InvalidArgument` for a negative or already used id, a
    /// control character in `text`, or empty `ratings`. A failed call leaves
    /// the server unchanged.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[Rating],
    ) -> Result<()> {
        self.index.check_new_id(id)?;
        validate_word(text)?;
        let rating = compute_average_rating(ratings)?;

        let words: Vec<&str> = self
            .tokenizer
            .tokenize(text)
            .filter(|word| !word.is_empty() && !self.stop_words.contains(word))
            .collect();

        self.index
            .insert_document(id, &words, DocumentData { rating, status })
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, ExecutionMode::Sequential, DocumentStatus::Actual)
    }

    /// Top documents with the given status.
    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, ExecutionMode::Sequential, status)
    }

    /// Top documents accepted by `predicate`, computed in `mode`.
    ///
    /// `predicate` is a [`DocumentStatus`] or any
    /// `Fn(DocumentId, DocumentStatus, Rating) -> bool + Sync`.
    pub fn find_top_documents_with<P>(
        &self,
        raw_query: &str,
        mode: ExecutionMode,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let ranker = Ranker::new(&self.index, self.config.accumulator_shards);
        match mode {
            ExecutionMode::Sequential => {
                let query = self.parse_query(raw_query, mode)?;
                Ok(ranker.find_top_documents(&query, mode, &predicate))
            }
            ExecutionMode::Parallel => self.thread_pool.install(|| {
                let query = self.parse_query(raw_query, mode)?;
                Ok(ranker.find_top_documents(&query, mode, &predicate))
            }),
        }
    }

    /// Explain which query words a document matches.
    ///
    /// Fails with `NotFound` for an unknown id and with `InvalidArgument` for
    /// a malformed query. If the document contains any minus word, no words
    /// are reported.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
        mode: ExecutionMode,
    ) -> Result<MatchedDocument> {
        let data = self
            .index
            .document_data(id)
            .ok_or_else(|| PikeError::not_found(format!("document id {id}")))?;

        let words = match mode {
            ExecutionMode::Sequential => {
                let query = self.parse_query(raw_query, mode)?;
                self.matched_words_sequential(&query, id)
            }
            ExecutionMode::Parallel => self.thread_pool.install(|| {
                let query = self.parse_query(raw_query, mode)?;
                Ok::<_, PikeError>(self.matched_words_parallel(&query, id))
            })?,
        };

        Ok(MatchedDocument {
            words,
            status: data.status,
        })
    }

    fn matched_words_sequential(&self, query: &Query, id: DocumentId) -> Vec<String> {
        if query
            .minus_words
            .iter()
            .any(|word| self.index.document_contains(id, word))
        {
            return Vec::new();
        }
        query
            .plus_words
            .iter()
            .filter(|word| self.index.document_contains(id, word))
            .cloned()
            .collect()
    }

    fn matched_words_parallel(&self, query: &Query, id: DocumentId) -> Vec<String> {
        let minus_words: Vec<&String> = query.minus_words.iter().collect();
        if minus_words
            .par_iter()
            .any(|word| self.index.document_contains(id, word))
        {
            return Vec::new();
        }
        let plus_words: Vec<&String> = query.plus_words.iter().collect();
        plus_words
            .par_iter()
            .filter(|word| self.index.document_contains(id, word))
            .map(|word| (*word).clone())
            .collect()
    }

    /// Remove a document. Unknown ids are ignored.
    pub fn remove_document(&mut self, id: DocumentId, mode: ExecutionMode) {
        match mode {
            ExecutionMode::Sequential => {
                self.index.remove_document(id);
            }
            ExecutionMode::Parallel => {
                let index = &mut self.index;
                self.thread_pool.install(|| index.remove_document_parallel(id));
            }
        }
    }

    /// Word frequencies of a document; `NotFound` for an unknown id.
    pub fn word_frequencies(&self, id: DocumentId) -> Result<&WordFrequencies> {
        self.index
            .word_frequencies(id)
            .ok_or_else(|| PikeError::not_found(format!("document id {id}")))
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.index.word_count()
    }

    /// Indexed document ids in ascending order.
    pub fn document_ids(&self) -> impl ExactSizeIterator<Item = DocumentId> + '_ {
        self.index.document_ids()
    }

    /// Parse a query with this server's stop words.
    pub fn parse_query(&self, raw_query: &str, mode: ExecutionMode) -> Result<Query> {
        QueryParser::new(&self.stop_words, &self.tokenizer).parse(raw_query, mode)
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocumentId;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, DocumentId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.index.document_id_set().iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_server() -> SearchServer {
        let mut server = SearchServer::from_stop_words_text("and in on").unwrap();
        server
            .add_document(0, "white cat and fancy collar", DocumentStatus::Actual, &[8, -3])
            .unwrap();
        server
            .add_document(1, "fluffy cat fluffy tail", DocumentStatus::Actual, &[7, 2, 7])
            .unwrap();
        server
            .add_document(
                2,
                "groomed dog expressive eyes",
                DocumentStatus::Actual,
                &[5, -12, 2, 1],
            )
            .unwrap();
        server
            .add_document(3, "groomed starling eugene", DocumentStatus::Banned, &[9])
            .unwrap();
        server
    }

    #[test]
    fn test_add_document_rejects_invalid_input() {
        let mut server = sample_server();
        let before = server.document_count();

        assert!(server.add_document(-1, "cat", DocumentStatus::Actual, &[1]).is_err());
        assert!(server.add_document(1, "cat", DocumentStatus::Actual, &[1]).is_err());
        assert!(
            server
                .add_document(7, "big\u{10}cat", DocumentStatus::Actual, &[1])
                .is_err()
        );
        assert!(server.add_document(8, "cat", DocumentStatus::Actual, &[]).is_err());

        assert_eq!(server.document_count(), before);
        assert!(server.word_frequencies(7).is_err());
        assert!(server.word_frequencies(8).is_err());
    }

    #[test]
    fn test_stop_words_are_not_indexed() {
        let server = sample_server();
        let freqs = server.word_frequencies(0).unwrap();
        assert!(!freqs.contains_key("and"));
        assert_eq!(freqs.len(), 4);
    }

    #[test]
    fn test_find_by_status() {
        let server = sample_server();
        let banned = server
            .find_top_documents_by_status("groomed", DocumentStatus::Banned)
            .unwrap();
        assert_eq!(banned.len(), 1);
        assert_eq!(banned[0].id, 3);
        assert_eq!(banned[0].rating, 9);
    }

    #[test]
    fn test_match_document() {
        let server = sample_server();
        let matched = server
            .match_document("fluffy cat -dog", 1, ExecutionMode::Sequential)
            .unwrap();
        assert_eq!(matched.words, vec!["cat", "fluffy"]);
        assert_eq!(matched.status, DocumentStatus::Actual);

        let matched = server
            .match_document("fluffy cat -tail", 1, ExecutionMode::Parallel)
            .unwrap();
        assert!(matched.words.is_empty());

        let matched = server
            .match_document("groomed", 3, ExecutionMode::Parallel)
            .unwrap();
        assert_eq!(matched.status, DocumentStatus::Banned);
    }

    #[test]
    fn test_match_document_errors() {
        let server = sample_server();
        let err = server
            .match_document("cat", 99, ExecutionMode::Sequential)
            .unwrap_err();
        assert!(err.is_not_found());

        let err = server
            .match_document("cat --dog", 1, ExecutionMode::Parallel)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_into_iterator() {
        let server = sample_server();
        let ids: Vec<_> = (&server).into_iter().collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(server.document_ids().len(), 4);
    }

    #[test]
    fn test_custom_config() {
        let config = SearchServerConfig::default()
            .with_accumulator_shards(2)
            .with_thread_pool_size(2);
        let server = SearchServer::with_config(StopWords::new(), config).unwrap();
        assert_eq!(server.config().accumulator_shards, 2);

        let bad = SearchServerConfig::default().with_accumulator_shards(0);
        assert!(SearchServer::with_config(StopWords::new(), bad).is_err());
    }
}
