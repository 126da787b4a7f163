//! Resolver benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rows_core::{Arrangement, ArrangementSet};
use rows_resolver::{resolve_arrangement, resolve_children};

fn arrangements() -> ArrangementSet {
    let lg: Arrangement = ["1/4", "1/2", "1/4", "1/3", "2/3"].into_iter().collect();
    let md: Arrangement = ["1/2"].into_iter().collect();
    let sm: Arrangement = Arrangement::new();

    ArrangementSet::new()
        .with("xl", Arrangement::new())
        .with("lg", lg)
        .with("md", md)
        .with("sm", sm)
}

fn resolve_single(c: &mut Criterion) {
    let set = arrangements();
    c.bench_function("resolve_single", |b| {
        b.iter(|| resolve_arrangement(black_box(17), black_box(&set)))
    });
}

fn resolve_hundred(c: &mut Criterion) {
    let set = arrangements();
    c.bench_function("resolve_hundred", |b| {
        b.iter(|| resolve_children(black_box(100), black_box(&set)))
    });
}

criterion_group!(benches, resolve_single, resolve_hundred);
criterion_main!(benches);
