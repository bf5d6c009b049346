use alloy::primitives::U256;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use token_swapper::amount::{compute_amount_in, min_amount_out};

fn amounts(c: &mut Criterion) {
    let balance = U256::from(123_456_789_000_000_000_000_000u128);

    c.bench_function("percent of balance", |b| {
        b.iter(|| compute_amount_in(black_box("50%"), black_box(balance), 18))
    });
    c.bench_function("fixed decimal amount", |b| {
        b.iter(|| compute_amount_in(black_box("1234.567890123456789012"), balance, 18))
    });
    c.bench_function("minimum output", |b| {
        b.iter(|| min_amount_out(black_box(balance)))
    });
}

criterion_group!(benches, amounts);
criterion_main!(benches);
