pub mod crawl;

use anyhow::Result;
use docindex::tokenizer::normalize_query;
use docindex::{DocId, DocRegistry, MemIndex};
use serde::Serialize;
use std::io::{BufRead, Write};

pub use crawl::crawl_file_tree;

#[derive(Debug, Clone, Default)]
pub struct ShellOptions {
    /// Emit one JSON object per query instead of the text transcript.
    pub json: bool,
}

#[derive(Serialize)]
pub struct QueryResponse<'a> {
    pub query: &'a [String],
    pub total_hits: usize,
    pub results: Vec<QueryHit<'a>>,
}

#[derive(Serialize)]
pub struct QueryHit<'a> {
    pub doc_id: DocId,
    pub name: &'a str,
    pub rank: usize,
}

/// Answer queries read line by line from `reader` until end of input.
pub fn process_queries<R: BufRead, W: Write>(
    docs: &DocRegistry,
    index: &MemIndex,
    reader: R,
    mut writer: W,
    options: &ShellOptions,
) -> Result<()> {
    let mut lines = reader.lines();
    loop {
        if !options.json {
            writeln!(writer, "enter query:")?;
            writer.flush()?;
        }
        let Some(line) = lines.next() else { break };
        let terms = normalize_query(&line?);
        let response = answer(docs, index, &terms);

        if options.json {
            serde_json::to_writer(&mut writer, &response)?;
            writeln!(writer)?;
        } else if terms.is_empty() {
            writeln!(writer, "nothing to search")?;
        } else {
            writeln!(writer, "Found {} documents", response.total_hits)?;
            for hit in &response.results {
                writeln!(writer, "   {} ({})", hit.name, hit.rank)?;
            }
        }
        writer.flush()?;
    }
    Ok(())
}

fn answer<'a>(docs: &'a DocRegistry, index: &MemIndex, terms: &'a [String]) -> QueryResponse<'a> {
    let results: Vec<QueryHit<'a>> = match index.search(terms) {
        Ok(hits) => hits
            .into_iter()
            .filter_map(|h| match docs.resolve_name(h.doc_id) {
                Some(name) => Some(QueryHit { doc_id: h.doc_id, name, rank: h.rank }),
                None => {
                    tracing::warn!(doc_id = h.doc_id, "search hit has no registered name");
                    None
                }
            })
            .collect(),
        Err(err) => {
            tracing::debug!(%err, "query matched nothing");
            Vec::new()
        }
    };
    QueryResponse { query: terms, total_hits: results.len(), results }
}
