//! Configuration for the search server.

use serde::{Deserialize, Serialize};

use crate::error::{PikeError, Result};

/// Maximum number of documents returned by a search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Relevances closer than this are considered equal when sorting.
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Default number of shards in the ranking accumulator.
pub const DEFAULT_ACCUMULATOR_SHARDS: usize = 8;

/// How an operation distributes its work.
///
/// Both modes produce identical results; parallel mode only changes latency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Run on the calling thread.
    #[default]
    Sequential,

    /// Fork-join over the server's worker pool.
    Parallel,
}

/// Configuration for [`SearchServer`](crate::search::server::SearchServer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchServerConfig {
    /// Number of independently locked shards used by parallel ranking.
    pub accumulator_shards: usize,

    /// Worker pool size for parallel operations.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for SearchServerConfig {
    fn default() -> Self {
        Self {
            accumulator_shards: DEFAULT_ACCUMULATOR_SHARDS,
            thread_pool_size: None,
        }
    }
}

impl SearchServerConfig {
    /// Set the number of accumulator shards.
    pub fn with_accumulator_shards(mut self, shards: usize) -> Self {
        self.accumulator_shards = shards;
        self
    }

    /// Set the worker pool size.
    pub fn with_thread_pool_size(mut self, threads: usize) -> Self {
        self.thread_pool_size = Some(threads);
        self
    }

    /// Pool size actually used.
    pub fn effective_thread_pool_size(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.accumulator_shards == 0 {
            return Err(PikeError::invalid_argument(
                "accumulator_shards must be at least 1",
            ));
        }
        if self.thread_pool_size == Some(0) {
            return Err(PikeError::invalid_argument(
                "thread_pool_size must be at least 1",
            ));
        }
        Ok(())
    }
}
