use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pricefinder::pricing::{self, PercentBand};
use pricefinder::reverse_price::search;
use pricefinder::rng::HourlyRng;

fn bench_fraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("hourly_fraction");
    let rng = HourlyRng::new("u1", 123456);

    group.bench_function("short_item_id", |b| {
        b.iter(|| rng.fraction(black_box("it1")));
    });

    group.bench_function("cuid_item_id", |b| {
        b.iter(|| rng.fraction(black_box("cmebn7caq0118nv01spx78x4t")));
    });

    group.finish();
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_price");
    let rng = HourlyRng::new("u1", 123456);
    let band = PercentBand::default();

    group.bench_function("base_500", |b| {
        b.iter(|| pricing::randomized_price(&rng, "it1", black_box(500), band));
    });

    group.bench_function("base_2685", |b| {
        b.iter(|| pricing::randomized_price(&rng, "it1", black_box(2685), band));
    });

    group.finish();
}

fn bench_recover(c: &mut Criterion) {
    let mut group = c.benchmark_group("recover_base_price");
    let band = PercentBand::default();

    // Estimate verifies on the first probe at this hour.
    let rng = HourlyRng::new("u1", 123456);
    let displayed = pricing::randomized_price(&rng, "it1", 500, band);
    group.bench_function("exact_on_estimate", |b| {
        b.iter(|| search::recover_base_price(&rng, "it1", black_box(displayed), band));
    });

    // Unreachable price walks the full probe window before giving up.
    group.bench_function("full_probe_window", |b| {
        b.iter(|| search::recover_base_price(&rng, "it1", black_box(50), band));
    });

    group.finish();
}

criterion_group!(benches, bench_fraction, bench_forward, bench_recover);
criterion_main!(benches);
