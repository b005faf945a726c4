use anyhow::{bail, Context, Result};
use docindex::tokenizer::word_positions;
use docindex::{DocRegistry, MemIndex, Position};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Index every text file under `root`.
///
/// Fails only if `root` itself is missing or not a directory. Unreadable
/// entries, binary or oversized files, and files whose lossy name collides
/// with one already indexed are skipped with a warning.
pub fn crawl_file_tree(root: &Path) -> Result<(DocRegistry, MemIndex)> {
    let meta = fs::metadata(root).with_context(|| format!("cannot open docroot {}", root.display()))?;
    if !meta.is_dir() {
        bail!("docroot {} is not a directory", root.display());
    }

    let mut docs = DocRegistry::new();
    let mut index = MemIndex::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(%err, "skipping unreadable entry");
                continue;
            }
        };
        if entry.file_type().is_file() {
            index_file(entry.path(), &mut docs, &mut index);
        }
    }

    tracing::info!(num_docs = docs.len(), num_words = index.num_words(), "indexed document tree");
    Ok((docs, index))
}

/// Files past this size cannot be addressed by a [`Position`].
const MAX_FILE_BYTES: u64 = Position::MAX as u64;

fn index_file(path: &Path, docs: &mut DocRegistry, index: &mut MemIndex) {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_FILE_BYTES => {
            tracing::warn!(path = %path.display(), len = meta.len(), "skipping file too large to index");
            return;
        }
        _ => {}
    }
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "skipping unreadable file");
            return;
        }
    };
    let Some(text) = as_text(bytes) else {
        tracing::debug!(path = %path.display(), "skipping non-text file");
        return;
    };

    let table = match word_positions(&text) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "skipping unparsable file");
            return;
        }
    };

    // lossy names can collide for paths that are not valid UTF-8
    let registered = docs.len();
    let doc_id = docs.register(&path.to_string_lossy());
    if docs.len() == registered {
        tracing::warn!(path = %path.display(), doc_id, "skipping file whose name is already registered");
        return;
    }
    for (word, positions) in table {
        index.add_posting(word, doc_id, positions);
    }
}

fn as_text(bytes: Vec<u8>) -> Option<String> {
    if bytes.contains(&0) {
        return None;
    }
    String::from_utf8(bytes).ok()
}
