//! Text analysis for Pike.
//!
//! Documents and queries go through the same small pipeline: the text is
//! split into space-delimited words, each word is checked for control
//! characters, and stop words are dropped before anything reaches the index.

pub mod stop_words;
pub mod tokenizer;
pub mod validation;

// Re-export commonly used types
pub use stop_words::StopWords;
pub use tokenizer::{Tokenizer, WhitespaceTokenizer, Words, split_into_words};
pub use validation::{is_valid_word, validate_word};
