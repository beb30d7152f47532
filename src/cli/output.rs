//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PikeArgs};
use crate::document::{Document, DocumentId, DocumentStatus};
use crate::error::Result;
use crate::search::config::ExecutionMode;

/// Results of a search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub mode: ExecutionMode,
    pub documents: Vec<Document>,
    pub duration_ms: u64,
}

/// Matched words of one document.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: DocumentId,
    pub status: DocumentStatus,
    pub words: Vec<String>,
}

/// Outcome of duplicate removal.
#[derive(Debug, Serialize, Deserialize)]
pub struct DedupResult {
    pub removed: Vec<DocumentId>,
    pub remaining_documents: usize,
}

/// Index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub distinct_words: usize,
    pub stop_words: usize,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    /// Print the result to stdout.
    fn print_human(&self);
}

impl HumanOutput for SearchResults {
    fn print_human(&self) {
        println!("Search Results:");
        println!("═══════════════");
        for document in &self.documents {
            println!("{document}");
        }
        println!();
        println!("Total hits: {}", self.documents.len());
        println!("Search time: {}ms", self.duration_ms);
    }
}

impl HumanOutput for MatchResult {
    fn print_human(&self) {
        println!(
            "{{ document_id = {}, status = {}, words = [{}] }}",
            self.id,
            self.status,
            self.words.join(", ")
        );
    }
}

impl HumanOutput for DedupResult {
    fn print_human(&self) {
        for id in &self.removed {
            println!("Found duplicate document id {id}");
        }
        println!(
            "Removed {} documents, {} remaining",
            self.removed.len(),
            self.remaining_documents
        );
    }
}

impl HumanOutput for IndexStats {
    fn print_human(&self) {
        println!("Index Statistics:");
        println!("════════════════");
        println!("Total documents: {}", self.total_documents);
        println!("Distinct words: {}", self.distinct_words);
        println!("Stop words: {}", self.stop_words);
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &PikeArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

fn output_json<T: Serialize>(result: &T, args: &PikeArgs) -> Result<()> {
    println!("{}", render_json(result, args.pretty)?);
    Ok(())
}

fn render_json<T: Serialize>(result: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}
