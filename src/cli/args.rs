//! Command line argument parsing for the Pike CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::document::{DocumentId, DocumentStatus};
use crate::search::config::ExecutionMode;

/// Pike - an in-memory TF-IDF document search engine
#[derive(Parser, Debug, Clone)]
#[command(name = "pike")]
#[command(about = "An in-memory TF-IDF document search engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PikeArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PikeArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search documents and print the top results
    Search(SearchArgs),

    /// Show which query words a document matches
    Match(MatchArgs),

    /// Remove documents with duplicate word sets
    Dedup(DedupArgs),

    /// Show index statistics
    Stats(StatsArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Document file (JSON Lines)
    #[arg(value_name = "DOCUMENTS")]
    pub documents: PathBuf,

    /// Query string, e.g. "fluffy cat -collar"
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Space-separated stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,

    /// Only return documents with this status
    #[arg(long, default_value = "actual")]
    pub status: DocumentStatus,

    /// Rank on the worker pool
    #[arg(short, long)]
    pub parallel: bool,
}

impl SearchArgs {
    /// Execution mode selected by `--parallel`.
    pub fn mode(&self) -> ExecutionMode {
        execution_mode(self.parallel)
    }
}

/// Arguments for matching one document
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Document file (JSON Lines)
    #[arg(value_name = "DOCUMENTS")]
    pub documents: PathBuf,

    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Document id to explain
    #[arg(long)]
    pub id: DocumentId,

    /// Space-separated stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,

    /// Match on the worker pool
    #[arg(short, long)]
    pub parallel: bool,
}

impl MatchArgs {
    /// Execution mode selected by `--parallel`.
    pub fn mode(&self) -> ExecutionMode {
        execution_mode(self.parallel)
    }
}

/// Arguments for duplicate removal
#[derive(Parser, Debug, Clone)]
pub struct DedupArgs {
    /// Document file (JSON Lines)
    #[arg(value_name = "DOCUMENTS")]
    pub documents: PathBuf,

    /// Space-separated stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Document file (JSON Lines)
    #[arg(value_name = "DOCUMENTS")]
    pub documents: PathBuf,

    /// Space-separated stop words
    #[arg(short, long, default_value = "")]
    pub stop_words: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

fn execution_mode(parallel: bool) -> ExecutionMode {
    if parallel {
        ExecutionMode::Parallel
    } else {
        ExecutionMode::Sequential
    }
}
