//! Running many independent queries at once.
//!
//! Searches only read the server, so a batch can fan out over rayon without
//! any locking. Results keep the order of the input queries.

use rayon::prelude::*;

use crate::document::Document;
use crate::error::Result;
use crate::search::server::SearchServer;

/// Run every query in parallel; one result list per query, in query order.
///
/// If several queries are malformed, the error of the first one is returned.
pub fn process_queries<Q>(server: &SearchServer, queries: &[Q]) -> Result<Vec<Vec<Document>>>
where
    Q: AsRef<str> + Sync,
{
    let results: Vec<Result<Vec<Document>>> = queries
        .par_iter()
        .map(|query| server.find_top_documents(query.as_ref()))
        .collect();
    results.into_iter().collect()
}

/// Like [`process_queries`], with all results concatenated in query order.
pub fn process_queries_joined<Q>(server: &SearchServer, queries: &[Q]) -> Result<Vec<Document>>
where
    Q: AsRef<str> + Sync,
{
    Ok(process_queries(server, queries)?
        .into_iter()
        .flatten()
        .collect())
}
