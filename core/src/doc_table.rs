use crate::{DocId, INVALID_DOC_ID};
use std::collections::HashMap;
use std::sync::Arc;

/// Bidirectional mapping between document names and the ids assigned to them.
///
/// Ids are handed out sequentially starting at 1 and are never reused, so the
/// id→name view is a dense vector (`by_id[id - 1]`). Both views share the same
/// name allocation and are only ever updated together by [`register`].
///
/// [`register`]: DocRegistry::register
#[derive(Debug, Default)]
pub struct DocRegistry {
    by_id: Vec<Arc<str>>,
    by_name: HashMap<Arc<str>, DocId>,
}

impl DocRegistry {
    pub fn new() -> Self { Self::default() }

    /// Return the id for `name`, registering it first if it is new.
    ///
    /// Registering a known name is a no-op that returns the original id. The
    /// registry keeps its own copy of the name; the caller's buffer is never
    /// retained.
    ///
    /// # Panics
    ///
    /// If the id space is exhausted.
    pub fn register(&mut self, name: &str) -> DocId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = self.next_id();
        let name: Arc<str> = Arc::from(name);
        self.by_id.push(Arc::clone(&name));
        self.by_name.insert(name, id);
        tracing::trace!(doc_id = id, "registered document");
        id
    }

    /// Id registered for `name`, or [`INVALID_DOC_ID`] if it is unknown.
    pub fn resolve_id(&self, name: &str) -> DocId {
        self.by_name.get(name).copied().unwrap_or(INVALID_DOC_ID)
    }

    /// Name registered under `id`, or `None` if the id was never handed out.
    ///
    /// # Panics
    ///
    /// If `id` is [`INVALID_DOC_ID`]; asking for the sentinel is a caller bug.
    pub fn resolve_name(&self, id: DocId) -> Option<&str> {
        assert_ne!(id, INVALID_DOC_ID, "resolve_name called with the invalid doc id");
        self.by_id.get(id as usize - 1).map(|name| &**name)
    }

    /// Number of distinct registered documents.
    pub fn len(&self) -> usize { self.by_id.len() }

    pub fn is_empty(&self) -> bool { self.by_id.is_empty() }

    /// All `(id, name)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> + '_ {
        self.by_id
            .iter()
            .enumerate()
            .map(|(idx, name)| (idx as DocId + 1, &**name))
    }

    fn next_id(&self) -> DocId {
        DocId::try_from(self.by_id.len() + 1)
            .ok()
            .filter(|&id| id != INVALID_DOC_ID)
            .expect("document id space exhausted")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut dt = DocRegistry::new();
        assert_eq!(dt.register("a.txt"), 1);
        assert_eq!(dt.register("b.txt"), 2);
        assert_eq!(dt.register("c.txt"), 3);
        assert_eq!(dt.len(), 3);
    }

    #[test]
    fn register_is_idempotent() {
        let mut dt = DocRegistry::new();
        let first = dt.register("notes/todo.md");
        let again = dt.register(&String::from("notes/todo.md"));
        assert_eq!(first, again);
        assert_eq!(dt.len(), 1);
    }

    #[test]
    fn unknown_lookups() {
        let mut dt = DocRegistry::new();
        dt.register("present");
        assert_eq!(dt.resolve_id("absent"), INVALID_DOC_ID);
        assert_eq!(dt.resolve_name(2), None);
    }

    #[test]
    #[should_panic(expected = "invalid doc id")]
    fn resolve_name_rejects_sentinel() {
        let dt = DocRegistry::new();
        let _ = dt.resolve_name(INVALID_DOC_ID);
    }

    #[test]
    fn iter_follows_registration_order() {
        let mut dt = DocRegistry::new();
        dt.register("z");
        dt.register("a");
        dt.register("z");
        let pairs: Vec<_> = dt.iter().collect();
        assert_eq!(pairs, vec![(1, "z"), (2, "a")]);
    }
}
