//! Duplicate document detection.
//!
//! Two documents are duplicates when they index exactly the same set of
//! words, regardless of term frequencies, status or rating. Of each group
//! of duplicates the document with the lowest id is kept.

use ahash::AHashSet;
use log::info;

use crate::document::DocumentId;
use crate::search::config::ExecutionMode;
use crate::search::server::SearchServer;

/// Ids of documents whose word set repeats one with a lower id.
pub fn find_duplicates(server: &SearchServer) -> Vec<DocumentId> {
    let mut seen: AHashSet<Vec<&str>> = AHashSet::new();
    let mut duplicates = Vec::new();

    for id in server.document_ids() {
        let Ok(word_freqs) = server.word_frequencies(id) else {
            continue;
        };
        let words: Vec<&str> = word_freqs.keys().map(String::as_str).collect();
        if !seen.insert(words) {
            duplicates.push(id);
        }
    }

    duplicates
}

/// Remove every duplicate document; returns the removed ids, ascending.
pub fn remove_duplicates(server: &mut SearchServer) -> Vec<DocumentId> {
    let duplicates = find_duplicates(server);
    for &id in &duplicates {
        info!("Found duplicate document id {id}");
        server.remove_document(id, ExecutionMode::Sequential);
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentStatus;

    #[test]
    fn test_remove_duplicates() {
        let mut server = SearchServer::from_stop_words_text("and with").unwrap();
        let docs = [
            (1, "funny pet and nasty rat", [7, 2, 7]),
            (2, "funny pet with curly hair", [1, 2, 3]),
            // same words as 2
            (3, "funny pet with curly hair", [1, 2, 3]),
            // differs from 2 only in stop words
            (4, "funny pet and curly hair", [1, 2, 3]),
            // same word set as 1, different frequencies
            (5, "funny funny pet and nasty nasty rat", [1, 2, 3]),
            (6, "funny pet and not very nasty rat", [1, 2, 3]),
            // same word set as 6 in another order
            (7, "very nasty rat and not very funny pet", [1, 2, 3]),
            (8, "pet with rat and rat and rat", [1, 2, 3]),
            (9, "nasty rat with curly hair", [1, 2, 3]),
        ];
        for (id, text, ratings) in docs {
            server
                .add_document(id, text, DocumentStatus::Actual, &ratings)
                .unwrap();
        }
        assert_eq!(server.document_count(), 9);

        let removed = remove_duplicates(&mut server);
        assert_eq!(removed, vec![3, 4, 5, 7]);
        assert_eq!(server.document_count(), 5);
        assert!(server.word_frequencies(3).is_err());
        assert_eq!(server.document_ids().collect::<Vec<_>>(), vec![1, 2, 6, 8, 9]);
    }

    #[test]
    fn test_no_duplicates() {
        let mut server = SearchServer::from_stop_words_text("").unwrap();
        server
            .add_document(0, "a b", DocumentStatus::Actual, &[1])
            .unwrap();
        server
            .add_document(1, "a c", DocumentStatus::Actual, &[1])
            .unwrap();
        assert!(remove_duplicates(&mut server).is_empty());
        assert_eq!(server.document_count(), 2);
    }
}
