use criterion::{criterion_group, criterion_main, Criterion};
use docindex::tokenizer::{tokenize, word_positions};

const TEXT: &str = include_str!("../src/index.rs");

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize_source", |b| b.iter(|| tokenize(TEXT)));
    c.bench_function("word_positions_source", |b| b.iter(|| word_positions(TEXT)));
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
