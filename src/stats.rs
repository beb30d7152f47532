//! Request statistics over a sliding window of searches.
//!
//! [`RequestQueue`] forwards searches to a [`SearchServer`] and remembers
//! the outcome of the last [`MIN_IN_DAY`] of them, one per minute of a day,
//! so callers can see how many recent requests found nothing.
//!
//! # Examples
//!
//! ```
//! use pike::document::DocumentStatus;
//! use pike::search::server::SearchServer;
//! use pike::stats::RequestQueue;
//!
//! let mut server = SearchServer::from_stop_words_text("and").unwrap();
//! server.add_document(1, "curly dog", DocumentStatus::Actual, &[1]).unwrap();
//!
//! let mut queue = RequestQueue::new(&server);
//! queue.add_find_request("empty request").unwrap();
//! queue.add_find_request("curly dog").unwrap();
//! assert_eq!(queue.no_result_requests(), 1);
//! ```

use std::collections::VecDeque;

use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::search::config::ExecutionMode;
use crate::search::ranker::DocumentPredicate;
use crate::search::server::SearchServer;

/// Number of requests kept in the window.
pub const MIN_IN_DAY: usize = 1440;

#[derive(Debug, Clone, Copy)]
struct QueryResult {
    result_count: usize,
}

impl QueryResult {
    fn is_empty(&self) -> bool {
        self.result_count == 0
    }
}

/// Search front end counting recent requests with no results.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    /// Create an empty queue over `server`.
    pub fn new(server: &'a SearchServer) -> Self {
        RequestQueue {
            server,
            requests: VecDeque::with_capacity(MIN_IN_DAY),
            no_result_requests: 0,
        }
    }

    /// Search for [`DocumentStatus::Actual`] documents and record the outcome.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, DocumentStatus::Actual)
    }

    /// Search for documents with `status` and record the outcome.
    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.add_find_request_with(raw_query, status)
    }

    /// Search with any predicate and record the outcome.
    ///
    /// Failed searches are returned to the caller and not recorded.
    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: DocumentPredicate,
    {
        let found =
            self.server
                .find_top_documents_with(raw_query, ExecutionMode::Sequential, predicate)?;
        self.push(QueryResult {
            result_count: found.len(),
        });
        Ok(found)
    }

    fn push(&mut self, result: QueryResult) {
        if self.requests.len() == MIN_IN_DAY {
            if let Some(oldest) = self.requests.pop_front() {
                if oldest.is_empty() {
                    self.no_result_requests -= 1;
                }
            }
        }
        if result.is_empty() {
            self.no_result_requests += 1;
        }
        self.requests.push_back(result);
    }

    /// Requests in the window that returned no documents.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    /// Number of requests currently in the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// True if no request has been recorded.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
