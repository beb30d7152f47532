//! TF-IDF ranking.
//!
//! For every plus word known to the index the ranker adds
//! `tf * ln(N / df)` to each posting document accepted by the predicate.
//! Documents containing any minus word are then dropped, the rest are
//! sorted by relevance (ties within [`RELEVANCE_EPSILON`] broken by rating)
//! and cut to [`MAX_RESULT_DOCUMENT_COUNT`].
//!
//! Parallel mode spreads the plus words over the current rayon pool and
//! collects scores in a [`ConcurrentAccumulator`]. Each partial score is
//! tagged with the position of its plus word, and per-document totals are
//! summed in that order starting from zero, the same order sequential mode
//! uses, so both modes yield bit-identical relevances.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::AddAssign;

use log::trace;
use rayon::prelude::*;

use crate::document::{Document, DocumentId, DocumentStatus, Rating};
use crate::index::inverted::InvertedIndex;
use crate::query::query::Query;
use crate::search::accumulator::ConcurrentAccumulator;
use crate::search::config::{ExecutionMode, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};

/// Decides whether a document may appear in search results.
///
/// Implemented for [`DocumentStatus`] (exact status match) and for any
/// `Fn(DocumentId, DocumentStatus, Rating) -> bool + Sync` closure.
pub trait DocumentPredicate: Sync {
    /// Returns true if the document is accepted.
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: Rating) -> bool;
}

impl DocumentPredicate for DocumentStatus {
    fn matches(&self, _id: DocumentId, status: DocumentStatus, _rating: Rating) -> bool {
        *self == status
    }
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocumentId, DocumentStatus, Rating) -> bool + Sync,
{
    fn matches(&self, id: DocumentId, status: DocumentStatus, rating: Rating) -> bool {
        self(id, status, rating)
    }
}

/// Partial scores of one document, tagged with the rank of the plus word
/// that produced each of them.
#[derive(Debug, Default)]
struct RankedScores(Vec<(usize, f64)>);

impl AddAssign<(usize, f64)> for RankedScores {
    fn add_assign(&mut self, part: (usize, f64)) {
        self.0.push(part);
    }
}

impl RankedScores {
    fn total(mut self) -> f64 {
        self.0.sort_unstable_by_key(|&(rank, _)| rank);
        self.0.iter().fold(0.0, |sum, &(_, score)| sum + score)
    }
}

/// Ranks documents of an index against parsed queries.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    index: &'a InvertedIndex,
    accumulator_shards: usize,
}

impl<'a> Ranker<'a> {
    /// Create a ranker over `index`.
    pub fn new(index: &'a InvertedIndex, accumulator_shards: usize) -> Self {
        Ranker {
            index,
            accumulator_shards,
        }
    }

    /// Top documents for `query`, best first, at most
    /// [`MAX_RESULT_DOCUMENT_COUNT`] of them.
    ///
    /// Parallel mode uses the rayon pool the caller is running in.
    pub fn find_top_documents<P>(
        &self,
        query: &Query,
        mode: ExecutionMode,
        predicate: &P,
    ) -> Vec<Document>
    where
        P: DocumentPredicate + ?Sized,
    {
        let mut matched = self.find_all_documents(query, mode, predicate);
        sort_documents(&mut matched);
        matched.truncate(MAX_RESULT_DOCUMENT_COUNT);
        matched
    }

    /// Every document matching `query`, in ascending id order.
    pub fn find_all_documents<P>(
        &self,
        query: &Query,
        mode: ExecutionMode,
        predicate: &P,
    ) -> Vec<Document>
    where
        P: DocumentPredicate + ?Sized,
    {
        let mut document_to_relevance = match mode {
            ExecutionMode::Sequential => self.accumulate_sequential(query, predicate),
            ExecutionMode::Parallel => self.accumulate_parallel(query, predicate),
        };
        let candidates = document_to_relevance.len();

        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                for id in postings.keys() {
                    document_to_relevance.remove(id);
                }
            }
        }
        trace!(
            "ranked {candidates} candidates, {} left after minus words",
            document_to_relevance.len()
        );

        document_to_relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.index
                    .document_data(id)
                    .map(|data| Document::new(id, relevance, data.rating))
            })
            .collect()
    }

    fn accepts<P>(&self, predicate: &P, id: DocumentId) -> bool
    where
        P: DocumentPredicate + ?Sized,
    {
        self.index
            .document_data(id)
            .is_some_and(|data| predicate.matches(id, data.status, data.rating))
    }

    fn accumulate_sequential<P>(&self, query: &Query, predicate: &P) -> BTreeMap<DocumentId, f64>
    where
        P: DocumentPredicate + ?Sized,
    {
        let mut document_to_relevance = BTreeMap::new();
        for word in &query.plus_words {
            let (Some(postings), Some(idf)) = (
                self.index.postings(word),
                self.index.inverse_document_freq(word),
            ) else {
                continue;
            };
            for (&id, &tf) in postings {
                if self.accepts(predicate, id) {
                    *document_to_relevance.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }
        document_to_relevance
    }

    fn accumulate_parallel<P>(&self, query: &Query, predicate: &P) -> BTreeMap<DocumentId, f64>
    where
        P: DocumentPredicate + ?Sized,
    {
        let accumulator: ConcurrentAccumulator<DocumentId, RankedScores> =
            ConcurrentAccumulator::new(self.accumulator_shards);
        let words: Vec<&String> = query.plus_words.iter().collect();

        words.par_iter().enumerate().for_each(|(rank, word)| {
            let (Some(postings), Some(idf)) = (
                self.index.postings(word),
                self.index.inverse_document_freq(word),
            ) else {
                return;
            };
            for (&id, &tf) in postings {
                if self.accepts(predicate, id) {
                    accumulator.add(id, (rank, tf * idf));
                }
            }
        });

        accumulator
            .snapshot()
            .into_iter()
            .map(|(id, scores)| (id, scores.total()))
            .collect()
    }
}

/// Sort by relevance descending; relevances within [`RELEVANCE_EPSILON`]
/// of their neighbour are ordered by rating descending, then id ascending.
///
/// Documents are first put in a strict total order, then each run of
/// neighbours closer than the epsilon is re-sorted by rating.
pub fn sort_documents(documents: &mut [Document]) {
    documents.sort_by(|lhs, rhs| {
        rhs.relevance
            .total_cmp(&lhs.relevance)
            .then_with(|| by_rating_then_id(lhs, rhs))
    });

    let mut start = 0;
    while start < documents.len() {
        let mut end = start + 1;
        while end < documents.len()
            && (documents[end - 1].relevance - documents[end].relevance).abs() < RELEVANCE_EPSILON
        {
            end += 1;
        }
        if end - start > 1 {
            documents[start..end].sort_by(by_rating_then_id);
        }
        start = end;
    }
}

fn by_rating_then_id(lhs: &Document, rhs: &Document) -> Ordering {
    rhs.rating.cmp(&lhs.rating).then_with(|| lhs.id.cmp(&rhs.id))
}
