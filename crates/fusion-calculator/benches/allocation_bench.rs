use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fusion_calculator::{Record, allocate_by_share, allocate_counts, normalize_shares};

fn allocate_counts_benchmark(c: &mut Criterion) {
    let functions = [20.0, 26.0, 12.0, 10.0, 32.0];
    c.bench_function("allocate_counts_5_functions", |b| {
        b.iter(|| allocate_counts(black_box(6639), black_box(&functions)).unwrap())
    });

    // 1000 categories with uneven weights, normalized once up front
    let weights: Vec<f64> = (0..1000).map(|i| f64::from(i % 17 + 1)).collect();
    let shares = normalize_shares(&weights);
    let sum: f64 = shares.iter().sum();
    let shares: Vec<f64> = shares.iter().map(|s| s / sum * 100.0).collect();
    c.bench_function("allocate_counts_1000_categories", |b| {
        b.iter(|| allocate_counts(black_box(1_000_000), black_box(&shares)))
    });
}

fn allocate_records_benchmark(c: &mut Criterion) {
    let rows: Vec<Record> = [("Sales", 20_i64), ("Ops", 26), ("Finance", 12), ("HR", 10), ("Engineering", 32)]
        .into_iter()
        .map(|(team, share)| Record::new().with("team", team).with("sharePct", share))
        .collect();

    c.bench_function("allocate_by_share_records", |b| {
        b.iter(|| allocate_by_share(black_box(6639), black_box(&rows), "sharePct", "total").unwrap())
    });
}

criterion_group!(benches, allocate_counts_benchmark, allocate_records_benchmark);
criterion_main!(benches);
