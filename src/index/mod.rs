//! Index module for Pike.
//!
//! The index keeps a forward map (word to postings) and a reverse map
//! (document to word frequencies) that mirror each other, plus per-document
//! metadata. Only invariant-preserving operations are exposed.

pub mod inverted;

// Re-export commonly used types
pub use inverted::{InvertedIndex, Postings, WordFrequencies};
