use thiserror::Error;

/// Expected negative outcomes of [`MemIndex::search`](crate::MemIndex::search).
///
/// None of these indicate a bug; callers that only care whether anything
/// matched can treat every variant as "no results".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("query has no terms")]
    EmptyQuery,

    /// A query term does not occur in any indexed document.
    #[error("term not indexed: {0}")]
    UnknownTerm(String),

    /// Every term is indexed but no single document contains all of them.
    #[error("no document contains every query term")]
    NoMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("document too large to index: word at byte offset {offset} exceeds position range")]
    DocumentTooLarge { offset: usize },
}
