//! Ranked search over the inverted index.

pub mod accumulator;
pub mod config;
pub mod ranker;
pub mod server;

// Re-export commonly used types
pub use accumulator::ConcurrentAccumulator;
pub use config::{ExecutionMode, MAX_RESULT_DOCUMENT_COUNT, SearchServerConfig};
pub use ranker::{DocumentPredicate, Ranker};
pub use server::{MatchedDocument, SearchServer};
