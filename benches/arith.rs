use bigratio::Rational;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;

fn harmonic(n: i64) -> Rational {
    (1..=n).map(|d| Rational::of(1, d).unwrap()).sum()
}

fn arith_benchmarks(c: &mut Criterion) {
    let a = Rational::of(355, 113).unwrap();
    let b = Rational::of(-22, 7).unwrap();
    let big = BigInt::from(10).pow(60) + 7;

    c.bench_function("of_reduce", |bench| {
        bench.iter(|| Rational::of(black_box(1_234_567_890_i64), black_box(-987_654_321_i64)))
    });
    c.bench_function("add_rational", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b))
    });
    c.bench_function("div_rational", |bench| {
        bench.iter(|| black_box(&a) / black_box(&b))
    });
    c.bench_function("mul_bigint", |bench| {
        bench.iter(|| black_box(&a) * black_box(&big))
    });
    c.bench_function("harmonic_100", |bench| bench.iter(|| harmonic(black_box(100))));
}

criterion_group!(benches, arith_benchmarks);
criterion_main!(benches);
