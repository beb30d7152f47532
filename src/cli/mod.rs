//! Command line interface for the Pike search engine.

pub mod args;
pub mod commands;
pub mod output;

pub use args::*;
pub use commands::*;
pub use output::*;
