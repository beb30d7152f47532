//! Query parsing for searching documents.

pub mod parser;
#[allow(clippy::module_inception)]
pub mod query;

pub use self::parser::QueryParser;
pub use self::query::{Query, QueryWord};
