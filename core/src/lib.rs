//! In-memory document registry and word-level inverted index.
//!
//! Both structures follow a build-then-query lifecycle: every mutator takes
//! `&mut self` and every lookup takes `&self`, so interleaving writes with
//! reads is rejected by the borrow checker. Once built, either structure can
//! be shared read-only across threads.

pub mod doc_table;
pub mod error;
pub mod index;
pub mod tokenizer;

pub use doc_table::DocRegistry;
pub use error::{ParseError, SearchError};
pub use index::{MemIndex, SearchResult};

/// Identifier handed out by [`DocRegistry`], starting at 1.
pub type DocId = u32;
/// Byte offset of a word occurrence within its document.
pub type Position = u32;

/// Reserved id meaning "no such document". Never handed out by [`DocRegistry`].
pub const INVALID_DOC_ID: DocId = 0;
