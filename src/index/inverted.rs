//! Dual forward/reverse inverted index.
//!
//! Every `(word, document)` pair lives in two places: the forward map
//! `word -> (document -> tf)` used for ranking, and the reverse map
//! `document -> (word -> tf)` used for removal and word-frequency lookups.
//! Both are mutated together by [`InvertedIndex::insert_document`] and the
//! removal methods and by nothing else.
//!
//! Invariants:
//! - a pair present in one map is present in the other with the same tf;
//! - a word with no postings is pruned from the forward map;
//! - the id set equals the key set of the metadata map;
//! - stop words never reach either map (callers filter them out).

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use rayon::prelude::*;

use crate::document::{DocumentData, DocumentId};
use crate::error::{PikeError, Result};

/// Posting list of one word: document id to term frequency.
pub type Postings = BTreeMap<DocumentId, f64>;

/// Words of one document with their term frequencies.
pub type WordFrequencies = BTreeMap<String, f64>;

/// In-memory inverted index with mirrored forward and reverse maps.
#[derive(Clone, Debug, Default)]
pub struct InvertedIndex {
    /// word -> document -> tf
    word_to_document_freqs: BTreeMap<String, Postings>,

    /// document -> word -> tf
    document_to_word_freqs: BTreeMap<DocumentId, WordFrequencies>,

    /// Rating and status per document.
    documents: BTreeMap<DocumentId, DocumentData>,

    /// Known document ids, ascending.
    document_ids: BTreeSet<DocumentId>,
}

impl InvertedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails unless `id` is non-negative and not yet indexed.
    pub fn check_new_id(&self, id: DocumentId) -> Result<()> {
        if id < 0 {
            return Err(PikeError::invalid_argument(format!(
                "document id {id} < 0"
            )));
        }
        if self.documents.contains_key(&id) {
            return Err(PikeError::invalid_argument(format!(
                "document id {id} is already indexed"
            )));
        }
        Ok(())
    }

    /// Index a document from its already filtered words.
    ///
    /// `words` must not contain stop words or empty words. Each occurrence
    /// contributes `1 / words.len()` to the word's term frequency. A document
    /// with no words is registered without postings.
    pub fn insert_document(
        &mut self,
        id: DocumentId,
        words: &[&str],
        data: DocumentData,
    ) -> Result<()> {
        self.check_new_id(id)?;

        let mut word_freqs = WordFrequencies::new();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for &word in words {
                *word_freqs.entry(word.to_string()).or_insert(0.0) += inv_word_count;
            }
        }

        for (word, &tf) in &word_freqs {
            self.word_to_document_freqs
                .entry(word.clone())
                .or_default()
                .insert(id, tf);
        }
        debug!(
            "indexed document {id}: {} tokens, {} distinct words",
            words.len(),
            word_freqs.len()
        );

        self.document_to_word_freqs.insert(id, word_freqs);
        self.documents.insert(id, data);
        self.document_ids.insert(id);

        Ok(())
    }

    /// Remove a document. Returns false if the id is unknown.
    pub fn remove_document(&mut self, id: DocumentId) -> bool {
        let Some(word_freqs) = self.detach_metadata(id) else {
            return false;
        };

        for word in word_freqs.keys() {
            if let Some(postings) = self.word_to_document_freqs.get_mut(word) {
                postings.remove(&id);
                if postings.is_empty() {
                    self.word_to_document_freqs.remove(word);
                }
            }
        }

        debug!("removed document {id} ({} words)", word_freqs.len());
        true
    }

    /// Remove a document, stripping its postings in parallel on the current
    /// rayon pool. Returns false if the id is unknown.
    ///
    /// The document's posting lists are detached from the forward map, each
    /// is cleaned by a worker, and the non-empty ones are put back. Structural
    /// changes to the shared maps only happen outside the parallel region.
    pub fn remove_document_parallel(&mut self, id: DocumentId) -> bool {
        let Some(word_freqs) = self.detach_metadata(id) else {
            return false;
        };

        let mut detached: Vec<(String, Postings)> = word_freqs
            .keys()
            .filter_map(|word| self.word_to_document_freqs.remove_entry(word))
            .collect();

        detached.par_iter_mut().for_each(|(_, postings)| {
            postings.remove(&id);
        });

        for (word, postings) in detached {
            if !postings.is_empty() {
                self.word_to_document_freqs.insert(word, postings);
            }
        }

        debug!("removed document {id} ({} words, parallel)", word_freqs.len());
        true
    }

    /// Drop the id, metadata and reverse entry; returns the reverse entry.
    fn detach_metadata(&mut self, id: DocumentId) -> Option<WordFrequencies> {
        if !self.document_ids.remove(&id) {
            return None;
        }
        self.documents.remove(&id);
        Some(self.document_to_word_freqs.remove(&id).unwrap_or_default())
    }

    /// Posting list of `word`, if any document contains it.
    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.word_to_document_freqs.get(word)
    }

    /// `ln(document_count / documents_containing_word)`, or None for an
    /// unknown word.
    pub fn inverse_document_freq(&self, word: &str) -> Option<f64> {
        self.postings(word)
            .map(|postings| (self.document_count() as f64 / postings.len() as f64).ln())
    }

    /// True if `id` contains `word`.
    pub fn document_contains(&self, id: DocumentId, word: &str) -> bool {
        self.postings(word)
            .is_some_and(|postings| postings.contains_key(&id))
    }

    /// Word frequencies of a document.
    pub fn word_frequencies(&self, id: DocumentId) -> Option<&WordFrequencies> {
        self.document_to_word_freqs.get(&id)
    }

    /// Stored metadata of a document.
    pub fn document_data(&self, id: DocumentId) -> Option<DocumentData> {
        self.documents.get(&id).copied()
    }

    /// True if `id` is indexed.
    pub fn contains_document(&self, id: DocumentId) -> bool {
        self.document_ids.contains(&id)
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.word_to_document_freqs.len()
    }

    /// Indexed ids in ascending order.
    pub fn document_ids(&self) -> impl ExactSizeIterator<Item = DocumentId> + '_ {
        self.document_ids.iter().copied()
    }

    /// Indexed ids as an ordered set.
    pub fn document_id_set(&self) -> &BTreeSet<DocumentId> {
        &self.document_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    fn data(rating: i32) -> DocumentData {
        DocumentData {
            rating,
            status: DocumentStatus::Actual,
        }
    }

    fn assert_consistent(index: &InvertedIndex) {
        for (word, postings) in &index.word_to_document_freqs {
            assert!(!postings.is_empty(), "empty posting list for {word}");
            for (id, tf) in postings {
                let mirrored = index.document_to_word_freqs[id][word];
                assert_eq!(mirrored, *tf);
            }
        }
        for (id, word_freqs) in &index.document_to_word_freqs {
            for (word, tf) in word_freqs {
                assert_eq!(index.word_to_document_freqs[word][id], *tf);
            }
        }
        let metadata_ids: BTreeSet<_> = index.documents.keys().copied().collect();
        assert_eq!(metadata_ids, index.document_ids);
        let reverse_ids: BTreeSet<_> = index.document_to_word_freqs.keys().copied().collect();
        assert_eq!(reverse_ids, index.document_ids);
    }

    fn sample_index() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index
            .insert_document(0, &["white", "cat", "fancy", "collar"], data(6))
            .unwrap();
        index
            .insert_document(1, &["fluffy", "cat", "fluffy", "tail"], data(6))
            .unwrap();
        index
            .insert_document(2, &["groomed", "dog", "expressive", "eyes"], data(5))
            .unwrap();
        index
    }

    #[test]
    fn test_term_frequencies() {
        let index = sample_index();
        let freqs = index.word_frequencies(1).unwrap();
        assert_eq!(freqs["fluffy"], 0.5);
        assert_eq!(freqs["cat"], 0.25);
        assert_eq!(freqs["tail"], 0.25);

        let total: f64 = freqs.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_consistent(&index);
    }

    #[test]
    fn test_inverse_document_freq() {
        let index = sample_index();
        let idf = index.inverse_document_freq("cat").unwrap();
        assert!((idf - (3.0_f64 / 2.0).ln()).abs() < 1e-12);
        assert!(index.inverse_document_freq("unicorn").is_none());
    }

    #[test]
    fn test_rejects_negative_and_duplicate_ids() {
        let mut index = sample_index();
        assert!(index.insert_document(-1, &["x"], data(1)).is_err());
        assert!(index.insert_document(1, &["x"], data(1)).is_err());
        assert_eq!(index.document_count(), 3);
        assert!(index.postings("x").is_none());
        assert_consistent(&index);
    }

    #[test]
    fn test_document_without_words() {
        let mut index = InvertedIndex::new();
        index.insert_document(4, &[], data(1)).unwrap();
        assert_eq!(index.document_count(), 1);
        assert!(index.word_frequencies(4).unwrap().is_empty());
        assert_eq!(index.word_count(), 0);
        assert!(index.remove_document(4));
        assert_eq!(index.document_count(), 0);
    }

    #[test]
    fn test_remove_prunes_empty_postings() {
        let mut index = sample_index();
        assert!(index.remove_document(2));
        assert!(index.postings("groomed").is_none());
        assert!(index.postings("dog").is_none());
        assert!(index.word_frequencies(2).is_none());
        assert!(!index.contains_document(2));
        assert_eq!(index.document_ids().collect::<Vec<_>>(), vec![0, 1]);
        assert_consistent(&index);
    }

    #[test]
    fn test_remove_keeps_shared_words() {
        let mut index = sample_index();
        assert!(index.remove_document(0));
        let cat = index.postings("cat").unwrap();
        assert_eq!(cat.keys().copied().collect::<Vec<_>>(), vec![1]);
        assert_consistent(&index);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut index = sample_index();
        assert!(!index.remove_document(42));
        assert!(!index.remove_document_parallel(42));
        assert_eq!(index.document_count(), 3);
        assert_consistent(&index);
    }

    #[test]
    fn test_parallel_remove_matches_sequential() {
        let mut sequential = sample_index();
        let mut parallel = sample_index();

        for id in [1, 0] {
            assert!(sequential.remove_document(id));
            assert!(parallel.remove_document_parallel(id));
            assert_consistent(&parallel);
            assert_eq!(
                sequential.word_to_document_freqs,
                parallel.word_to_document_freqs
            );
            assert_eq!(
                sequential.document_to_word_freqs,
                parallel.document_to_word_freqs
            );
            assert_eq!(sequential.document_ids, parallel.document_ids);
        }
    }
}
