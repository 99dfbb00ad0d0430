//! Benchmarks for era arithmetic

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kairos_core::{max_lower, Endpoint, Era};

fn bench_endpoint_max_lower(c: &mut Criterion) {
    let a = Endpoint::Closed(3.0);
    let b = Endpoint::Open(3.0);

    c.bench_function("endpoint_max_lower", |bench| {
        bench.iter(|| max_lower(black_box(a), black_box(b)))
    });
}

fn bench_era_intersect(c: &mut Criterion) {
    let a = Era::closed(0.0, 10.0);
    let b = Era::closed(5.0, 15.0);

    c.bench_function("era_intersect", |bench| {
        bench.iter(|| black_box(a).intersect(black_box(&b)))
    });
}

fn bench_era_sequence(c: &mut Criterion) {
    let a = Era::closed(0.0, 5.0).float();
    let b = Era::floating(Endpoint::Open(0.0), Endpoint::Closed(3.0)).unwrap();

    c.bench_function("era_sequence", |bench| {
        bench.iter(|| black_box(a).sequence(black_box(&b)))
    });
}

fn bench_era_contains(c: &mut Criterion) {
    let era = Era::floating(Endpoint::Closed(0.0), Endpoint::Open(10.0)).unwrap();

    c.bench_function("era_contains", |bench| {
        let mut t = 0.0;
        bench.iter(|| {
            t = (t + 0.25) % 12.0;
            black_box(era.contains(black_box(t)))
        })
    });
}

fn bench_era_shift(c: &mut Criterion) {
    let era = Era::closed(0.0, 5.0);

    c.bench_function("era_shift", |bench| {
        bench.iter(|| black_box(era).shift(black_box(2.5)))
    });
}

criterion_group!(
    benches,
    bench_endpoint_max_lower,
    bench_era_intersect,
    bench_era_sequence,
    bench_era_contains,
    bench_era_shift,
);
criterion_main!(benches);
