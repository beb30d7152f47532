//! Command implementations for the Pike CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dedup::remove_duplicates;
use crate::document::{DocumentId, DocumentStatus, Rating};
use crate::error::{PikeError, Result};
use crate::search::server::SearchServer;

/// One line of a document file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    pub ratings: Vec<Rating>,
}

/// Execute a CLI command.
pub fn execute_command(args: PikeArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_documents(search_args, &args),
        Command::Match(match_args) => match_document(match_args, &args),
        Command::Dedup(dedup_args) => dedup_documents(dedup_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Read a JSON Lines document file. Blank lines are skipped.
pub fn load_documents(path: &Path) -> Result<Vec<DocumentRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str::<DocumentRecord>(&line).map_err(|e| {
            PikeError::invalid_argument(format!(
                "{}: line {}: {e}",
                path.display(),
                line_num + 1
            ))
        })?;
        records.push(record);
    }

    debug!("loaded {} documents from {}", records.len(), path.display());
    Ok(records)
}

/// Build a server over `records`, stopping at the first rejected document.
pub fn build_server(records: &[DocumentRecord], stop_words: &str) -> Result<SearchServer> {
    let mut server = SearchServer::from_stop_words_text(stop_words)?;
    for record in records {
        server.add_document(record.id, &record.text, record.status, &record.ratings)?;
    }
    Ok(server)
}

fn load_server(path: &Path, stop_words: &str) -> Result<SearchServer> {
    let records = load_documents(path)?;
    let server = build_server(&records, stop_words)?;
    info!(
        "indexed {} documents, {} distinct words",
        server.document_count(),
        server.word_count()
    );
    Ok(server)
}

fn search_documents(args: &SearchArgs, cli_args: &PikeArgs) -> Result<()> {
    let server = load_server(&args.documents, &args.stop_words)?;

    let start_time = Instant::now();
    let documents = server.find_top_documents_with(&args.query, args.mode(), args.status)?;
    let duration = start_time.elapsed();

    output_result(
        "Search completed",
        &SearchResults {
            query: args.query.clone(),
            mode: args.mode(),
            documents,
            duration_ms: duration.as_millis() as u64,
        },
        cli_args,
    )
}

fn match_document(args: &MatchArgs, cli_args: &PikeArgs) -> Result<()> {
    let server = load_server(&args.documents, &args.stop_words)?;
    let matched = server.match_document(&args.query, args.id, args.mode())?;

    output_result(
        "Match completed",
        &MatchResult {
            id: args.id,
            status: matched.status,
            words: matched.words,
        },
        cli_args,
    )
}

fn dedup_documents(args: &DedupArgs, cli_args: &PikeArgs) -> Result<()> {
    let mut server = load_server(&args.documents, &args.stop_words)?;
    let removed = remove_duplicates(&mut server);

    output_result(
        "Duplicates removed",
        &DedupResult {
            removed,
            remaining_documents: server.document_count(),
        },
        cli_args,
    )
}

fn show_stats(args: &StatsArgs, cli_args: &PikeArgs) -> Result<()> {
    let server = load_server(&args.documents, &args.stop_words)?;

    output_result(
        "Index statistics",
        &IndexStats {
            total_documents: server.document_count(),
            distinct_words: server.word_count(),
            stop_words: server.stop_words().len(),
        },
        cli_args,
    )
}
