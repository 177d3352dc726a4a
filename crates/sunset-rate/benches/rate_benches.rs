//! Criterion benchmarks for the quote path.
//!
//! Covers: denominator computation and full quotes at the window start
//! and deep into the discount window.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sunset_core::constants::{DISCOUNT_WINDOW_START, SECONDS_PER_DAY};
use sunset_core::traits::RateQuoter;
use sunset_rate::RateEngine;

fn bench_denominator(c: &mut Criterion) {
    let engine = RateEngine::standard();
    let ts = DISCOUNT_WINDOW_START + 180 * SECONDS_PER_DAY;

    c.bench_function("denominator_at", |b| {
        b.iter(|| engine.denominator_at(black_box(ts)))
    });
}

fn bench_quote_window_start(c: &mut Criterion) {
    let engine = RateEngine::standard();
    let amount = 5_000_000_000u64;

    c.bench_function("quote_window_start", |b| {
        b.iter(|| engine.quote(black_box(amount), black_box(DISCOUNT_WINDOW_START)))
    });
}

fn bench_quote_discounted(c: &mut Criterion) {
    let engine = RateEngine::standard();
    let amount = 5_000_000_000u64;
    // Half a year into the discount window.
    let ts = DISCOUNT_WINDOW_START + 180 * SECONDS_PER_DAY;

    c.bench_function("quote_discounted", |b| {
        b.iter(|| engine.quote(black_box(amount), black_box(ts)))
    });
}

criterion_group!(
    benches,
    bench_denominator,
    bench_quote_window_start,
    bench_quote_discounted
);
criterion_main!(benches);
