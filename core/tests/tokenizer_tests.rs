use docindex::tokenizer::{normalize_query, tokenize, word_positions};

#[test]
fn it_lowercases_and_splits_on_non_letters() {
    let toks = tokenize("Running-Runners RUN! 42 cafés");
    let words: Vec<String> = toks.into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["running", "runners", "run", "cafés"]);
}

#[test]
fn it_keeps_stopwords_and_does_not_stem() {
    let table = word_positions("The runner and the run").unwrap();
    assert!(table.contains_key("the"));
    assert!(table.contains_key("and"));
    assert!(table.contains_key("runner"));
    assert!(table.contains_key("run"));
}

#[test]
fn positions_are_byte_offsets() {
    let text = "héllo world";
    let table = word_positions(text).unwrap();
    // 'é' is two bytes
    assert_eq!(table["world"], vec![7]);
    assert_eq!(&text[7..], "world");
}

#[test]
fn query_terms_match_indexed_words() {
    let indexed = word_positions("Quick brown fox").unwrap();
    for term in normalize_query("QUICK Fox") {
        assert!(indexed.contains_key(&term), "{term} should be indexed");
    }
}
