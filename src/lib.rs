//! # Pike
//!
//! An in-memory TF-IDF document search engine.
//!
//! ## Features
//!
//! - Space-separated tokenization with stop words
//! - Queries with plus and minus words
//! - TF-IDF ranking with rating tie-breaks, top 5 results
//! - Sequential and parallel execution with identical results
//! - Match explanation, removal and duplicate detection
//!
//! ## Example
//!
//! ```
//! use pike::prelude::*;
//!
//! let mut server = SearchServer::from_stop_words_text("and with").unwrap();
//! server
//!     .add_document(1, "funny pet and nasty rat", DocumentStatus::Actual, &[7, 2, 7])
//!     .unwrap();
//! server
//!     .add_document(2, "funny pet with curly hair", DocumentStatus::Actual, &[1, 2])
//!     .unwrap();
//!
//! let results = server
//!     .find_top_documents_with("curly pet", ExecutionMode::Parallel, DocumentStatus::Actual)
//!     .unwrap();
//! assert_eq!(results[0].id, 2);
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod dedup;
pub mod document;
pub mod error;
pub mod index;
pub mod paginate;
pub mod query;
pub mod search;
pub mod stats;

pub mod prelude {
    pub use crate::analysis::StopWords;
    pub use crate::batch::{process_queries, process_queries_joined};
    pub use crate::dedup::remove_duplicates;
    pub use crate::document::{Document, DocumentId, DocumentStatus, Rating};
    pub use crate::error::{PikeError, Result};
    pub use crate::paginate::{Paginator, paginate};
    pub use crate::search::{ExecutionMode, MatchedDocument, SearchServer, SearchServerConfig};
    pub use crate::stats::RequestQueue;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
