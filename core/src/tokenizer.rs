use crate::{ParseError, Position};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\p{Alphabetic}+").expect("valid regex");
}

/// Split text into lowercase words, each paired with the byte offset where it starts.
///
/// A word is a maximal run of alphabetic characters; everything else separates words.
pub fn tokenize(text: &str) -> Vec<(String, usize)> {
    WORD.find_iter(text)
        .map(|m| (m.as_str().to_lowercase(), m.start()))
        .collect()
}

/// Group the words of `text` into per-word position lists, ready for
/// [`MemIndex::add_posting`](crate::MemIndex::add_posting).
pub fn word_positions(text: &str) -> Result<HashMap<String, Vec<Position>>, ParseError> {
    let mut table: HashMap<String, Vec<Position>> = HashMap::new();
    for (word, offset) in tokenize(text) {
        let pos = Position::try_from(offset).map_err(|_| ParseError::DocumentTooLarge { offset })?;
        table.entry(word).or_default().push(pos);
    }
    Ok(table)
}

/// Turn a raw query line into lowercase terms split on whitespace.
pub fn normalize_query(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Hi, there!");
        assert_eq!(t, vec![("hi".to_string(), 0), ("there".to_string(), 4)]);
    }

    #[test]
    fn positions_group_by_word() {
        let table = word_positions("the cat saw the dog").unwrap();
        assert_eq!(table["the"], vec![0, 12]);
        assert_eq!(table["cat"], vec![4]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn query_is_lowercased() {
        assert_eq!(normalize_query("  Cat\tDOG \n"), vec!["cat", "dog"]);
        assert!(normalize_query("   ").is_empty());
    }
}
