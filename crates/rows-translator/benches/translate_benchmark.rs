//! Translator benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rows_translator::{TranslationCache, Translator};

const TOKENS: &[&str] = &["1/3", "2/3", "50%", "33.33%", "fill", "fit", "auto", "", "wide"];

fn translate_tokens(c: &mut Criterion) {
    let translator = Translator::default();
    c.bench_function("translate_tokens", |b| {
        b.iter(|| {
            for token in TOKENS {
                black_box(translator.translate(black_box(token)));
            }
        })
    });
}

fn translate_cached(c: &mut Criterion) {
    let translator = Translator::default();
    let mut cache = TranslationCache::new();
    c.bench_function("translate_cached", |b| {
        b.iter(|| {
            for token in TOKENS {
                black_box(translator.translate_cached(black_box(token), &mut cache));
            }
        })
    });
}

criterion_group!(benches, translate_tokens, translate_cached);
criterion_main!(benches);
