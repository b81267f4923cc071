use criterion::{black_box, criterion_group, criterion_main, Criterion};
use judge_templates::sieve::Sieve;
use judge_templates::Catalog;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    for &bound in &[10_000usize, 1_000_000, 4_000_000] {
        group.bench_function(format!("build_{bound}"), |b| {
            b.iter(|| Sieve::new(black_box(bound)))
        });
    }
    group.finish();
}

fn bench_sieve_templates(c: &mut Criterion) {
    let catalog = Catalog::new();
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut bertrand: String = (0..100)
        .map(|_| format!("{}\n", rng.gen_range(1..=123_456)))
        .collect();
    bertrand.push_str("0\n");

    let mut group = c.benchmark_group("sieve_templates");
    group.bench_function("primes_in_range_1e6", |b| {
        b.iter(|| catalog.run("1929", black_box("1 1000000\n")).unwrap())
    });
    group.bench_function("consecutive_primes_4e6", |b| {
        b.iter(|| catalog.run("1644", black_box("4000000\n")).unwrap())
    });
    group.bench_function("bertrand_100_queries", |b| {
        b.iter(|| catalog.run("4948", black_box(&bertrand)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_sieve, bench_sieve_templates);
criterion_main!(benches);
