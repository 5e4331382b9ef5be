use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pal_core::{check, normalize};

const PHRASE: &str = "A man, a plan, a canal: Panama";

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_phrase", |b| {
        b.iter(|| normalize(black_box(PHRASE)))
    });
}

fn bench_check(c: &mut Criterion) {
    c.bench_function("check_phrase", |b| b.iter(|| check(black_box(PHRASE))));
}

criterion_group!(benches, bench_normalize, bench_check);
criterion_main!(benches);
