//! Criterion benchmarks for the Pike search engine.
//!
//! Covers document ingestion, sequential versus parallel ranking, match
//! explanation, batch queries and removal.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pike::batch::process_queries;
use pike::document::DocumentStatus;
use pike::search::config::ExecutionMode;
use pike::search::server::SearchServer;
use std::hint::black_box;

const STOP_WORDS: &str = "and with the of";

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "search", "engine", "full", "text", "index", "query", "document", "field", "term",
        "phrase", "and", "with", "the", "of", "relevance", "score", "analysis", "ranking",
        "filtering", "cat", "dog", "fluffy", "collar", "tail", "groomed", "eyes", "white",
        "curly", "hair", "nasty", "rat", "pet",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 10 + (i % 40);
        let mut doc_words = Vec::with_capacity(doc_length);

        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len();
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

fn build_server(count: usize) -> SearchServer {
    let mut server = SearchServer::from_stop_words_text(STOP_WORDS).unwrap();
    for (id, text) in generate_test_documents(count).iter().enumerate() {
        let rating = (id % 10) as i32;
        server
            .add_document(id as i32, text, DocumentStatus::Actual, &[rating, 1])
            .unwrap();
    }
    server
}

/// Benchmark document ingestion.
fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexing");
    let texts = generate_test_documents(1000);

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("add_documents", |b| {
        b.iter(|| {
            let mut server = SearchServer::from_stop_words_text(STOP_WORDS).unwrap();
            for (id, text) in texts.iter().enumerate() {
                server
                    .add_document(id as i32, black_box(text), DocumentStatus::Actual, &[1, 2])
                    .unwrap();
            }
            black_box(server.document_count())
        })
    });

    group.finish();
}

/// Benchmark ranking in both execution modes.
fn bench_find_top_documents(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_top_documents");
    let query = "fluffy cat groomed dog white collar relevance ranking -nasty -rat";

    for count in [1_000, 10_000] {
        let server = build_server(count);
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), count),
                &server,
                |b, server| {
                    b.iter(|| {
                        let result = server.find_top_documents_with(
                            black_box(query),
                            mode,
                            DocumentStatus::Actual,
                        );
                        black_box(result)
                    })
                },
            );
        }
    }

    group.finish();
}

/// Benchmark match explanation in both execution modes.
fn bench_match_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_document");
    let server = build_server(1000);
    let query = "fluffy cat groomed dog white collar -nasty";

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter(|| black_box(server.match_document(black_box(query), 42, mode)))
        });
    }

    group.finish();
}

/// Benchmark batch query processing.
fn bench_batch_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_queries");
    let server = build_server(5000);
    let queries: Vec<String> = generate_test_documents(200)
        .into_iter()
        .map(|text| text.split(' ').take(6).collect::<Vec<_>>().join(" "))
        .collect();

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("process_queries", |b| {
        b.iter(|| black_box(process_queries(&server, black_box(&queries))))
    });

    group.finish();
}

/// Benchmark document removal in both execution modes.
fn bench_remove_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_document");
    group.sample_size(20);
    let server = build_server(2000);

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        group.bench_function(format!("{mode:?}"), |b| {
            b.iter_with_setup(
                || server.clone(),
                |mut server| {
                    for id in 0..100 {
                        server.remove_document(id, mode);
                    }
                    black_box(server.document_count())
                },
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_indexing,
    bench_find_top_documents,
    bench_match_document,
    bench_batch_queries,
    bench_remove_document
);

criterion_main!(benches);
