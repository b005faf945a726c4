use crate::{DocId, Position, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Positions of one word inside one document.
pub type Posting = Vec<Position>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    /// Sum over the query terms of how often each occurs in the document.
    pub rank: usize,
}

/// Word-level inverted index: word → (document → posting).
///
/// The word is the map key, so a word is stored exactly once no matter how
/// many documents it is posted under.
#[derive(Debug, Default)]
pub struct MemIndex {
    terms: HashMap<String, HashMap<DocId, Posting>>,
}

impl MemIndex {
    pub fn new() -> Self { Self::default() }

    /// Record that `word` occurs in `doc_id` at `positions`.
    ///
    /// The index takes ownership of both buffers. When `word` is already
    /// indexed the incoming copy is simply dropped.
    ///
    /// # Panics
    ///
    /// If `doc_id` already has a posting for `word`. Each (word, document)
    /// pair must be added exactly once.
    pub fn add_posting(&mut self, word: String, doc_id: DocId, positions: Posting) {
        match self.terms.entry(word).or_default().entry(doc_id) {
            Entry::Occupied(_) => panic!("duplicate posting for doc {doc_id}"),
            Entry::Vacant(slot) => {
                slot.insert(positions);
            }
        }
    }

    /// Conjunctive search: documents containing every term, best rank first.
    ///
    /// Ranks are the summed occurrence counts of the terms. Documents with
    /// equal rank come back in no particular order.
    pub fn search<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<SearchResult>, SearchError> {
        let (first, rest) = terms.split_first().ok_or(SearchError::EmptyQuery)?;

        let mut results: Vec<SearchResult> = self
            .lookup(first.as_ref())?
            .iter()
            .map(|(&doc_id, posting)| SearchResult { doc_id, rank: posting.len() })
            .collect();

        for term in rest {
            let postings = self.lookup(term.as_ref())?;
            results.retain_mut(|r| match postings.get(&r.doc_id) {
                Some(posting) => {
                    r.rank += posting.len();
                    true
                }
                None => false,
            });
            if results.is_empty() {
                return Err(SearchError::NoMatch);
            }
        }

        results.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));
        tracing::debug!(terms = terms.len(), hits = results.len(), "search complete");
        Ok(results)
    }

    /// Number of distinct words indexed.
    pub fn num_words(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn contains_word(&self, word: &str) -> bool { self.terms.contains_key(word) }

    /// Every document posted under `word`, keyed by id.
    pub fn postings(&self, word: &str) -> Option<&HashMap<DocId, Posting>> {
        self.terms.get(word)
    }

    fn lookup(&self, term: &str) -> Result<&HashMap<DocId, Posting>, SearchError> {
        self.terms
            .get(term)
            .ok_or_else(|| SearchError::UnknownTerm(term.to_string()))
    }
}
