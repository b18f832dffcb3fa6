//! Benchmarks for molt-coins.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use molt_coins::{Coin, Coins};

fn wallet(prefix: char, count: usize, amount: i64) -> Coins {
    (0..count)
        .map(|i| Coin::new(format!("{prefix}{}", denom_suffix(i)), amount))
        .collect::<Vec<_>>()
        .try_into()
        .expect("unique denoms")
}

/// Alphabetic suffix for index `i` (`a`, `b`, ..., `z`, `ba`, ...).
fn denom_suffix(mut i: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'a' + (i % 26) as u8);
        i /= 26;
        if i == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).expect("ascii suffix")
}

fn benchmark_parse(c: &mut Criterion) {
    let text = wallet('x', 64, 1_000).to_string();

    c.bench_function("parse_64_coins", |b| {
        b.iter(|| {
            let _ = Coins::parse(black_box(&text));
        });
    });
}

fn benchmark_plus_disjoint(c: &mut Criterion) {
    let lhs = wallet('a', 256, 10);
    let rhs = wallet('b', 256, 10);

    c.bench_function("plus_disjoint_256", |b| {
        b.iter(|| black_box(&lhs).plus(black_box(&rhs)));
    });
}

fn benchmark_plus_overlapping(c: &mut Criterion) {
    let lhs = wallet('a', 256, 10);
    let rhs = wallet('a', 256, 5);

    c.bench_function("plus_overlapping_256", |b| {
        b.iter(|| black_box(&lhs).plus(black_box(&rhs)));
    });
}

fn benchmark_minus_cancelling(c: &mut Criterion) {
    let held = wallet('a', 256, 10);

    c.bench_function("minus_self_256", |b| {
        b.iter(|| black_box(&held).minus(black_box(&held)));
    });
}

fn benchmark_is_gte(c: &mut Criterion) {
    let lhs = wallet('a', 256, 10);
    let rhs = wallet('a', 128, 5);

    c.bench_function("is_gte_256_vs_128", |b| {
        b.iter(|| black_box(&lhs).is_gte(black_box(&rhs)));
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_plus_disjoint,
    benchmark_plus_overlapping,
    benchmark_minus_cancelling,
    benchmark_is_gte,
);

criterion_main!(benches);
