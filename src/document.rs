//! Document types.
//!
//! - [`DocumentStatus`] - Caller-supplied status stored with every document
//! - [`Document`] - A ranked search result: id, query relevance and rating
//! - [`DocumentData`] - Metadata the index keeps per document

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PikeError, Result};

/// Document identifier. Only non-negative ids are accepted by the index.
pub type DocumentId = i32;

/// Average rating of a document.
pub type Rating = i32;

/// Status of a document, supplied when the document is added.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Live document; the default search filter.
    #[default]
    Actual,
    /// Document judged not relevant.
    Irrelevant,
    /// Banned document.
    Banned,
    /// Document marked as removed by the caller.
    Removed,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentStatus::Actual => "actual",
            DocumentStatus::Irrelevant => "irrelevant",
            DocumentStatus::Banned => "banned",
            DocumentStatus::Removed => "removed",
        };
        f.write_str(name)
    }
}

impl FromStr for DocumentStatus {
    type Err = PikeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "actual" => Ok(DocumentStatus::Actual),
            "irrelevant" => Ok(DocumentStatus::Irrelevant),
            "banned" => Ok(DocumentStatus::Banned),
            "removed" => Ok(DocumentStatus::Removed),
            other => Err(PikeError::invalid_argument(format!(
                "unknown document status {other:?}"
            ))),
        }
    }
}

/// A document as returned by a search, with its query-dependent relevance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document id.
    pub id: DocumentId,
    /// TF-IDF relevance for the query that produced this result.
    pub relevance: f64,
    /// Average rating computed at insertion.
    pub rating: Rating,
}

impl Document {
    /// Create a new result document.
    pub fn new(id: DocumentId, relevance: f64, rating: Rating) -> Self {
        Document {
            id,
            relevance,
            rating,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Per-document metadata kept by the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentData {
    /// Average rating.
    pub rating: Rating,
    /// Caller-supplied status.
    pub status: DocumentStatus,
}

/// Integer average of `ratings`, truncated toward zero.
///
/// Fails with `InvalidArgument` for an empty slice.
pub fn compute_average_rating(ratings: &[Rating]) -> Result<Rating> {
    if ratings.is_empty() {
        return Err(PikeError::invalid_argument(
            "ratings must not be empty",
        ));
    }

    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    let average = sum / ratings.len() as i64;
    // The mean of i32 values always fits in an i32.
    Ok(average as Rating)
}
