//! Error types for the Pike library.
//!
//! Every fallible operation returns [`Result`], whose error type is the
//! [`PikeError`] enum. Index and query operations only ever produce the
//! [`PikeError::InvalidArgument`] and [`PikeError::NotFound`] variants; the
//! I/O and JSON variants are raised by the command line front end when it
//! loads documents from disk.
//!
//! # Examples
//!
//! ```
//! use pike::error::{PikeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PikeError::invalid_argument("Document id < 0"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Pike operations.
#[derive(Error, Debug)]
pub enum PikeError {
    /// Malformed input: negative or duplicate id, control characters,
    /// malformed minus syntax, empty ratings, bad configuration.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation on an unknown document id.
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O errors (reading document files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PikeError.
pub type Result<T> = std::result::Result<T, PikeError>;

impl PikeError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PikeError::InvalidArgument(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        PikeError::NotFound(msg.into())
    }

    /// Returns true for [`PikeError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PikeError::InvalidArgument(_))
    }

    /// Returns true for [`PikeError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, PikeError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = PikeError::invalid_argument("Document id < 0");
        assert_eq!(error.to_string(), "Invalid argument: Document id < 0");
        assert!(error.is_invalid_argument());

        let error = PikeError::not_found("document 7");
        assert_eq!(error.to_string(), "Not found: document 7");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let pike_error = PikeError::from(io_error);

        match pike_error {
            PikeError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
