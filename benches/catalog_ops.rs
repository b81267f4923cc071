use criterion::{black_box, criterion_group, criterion_main, Criterion};
use judge_templates::{Catalog, Category, Difficulty, RunRequest, Selector};
use rand::{rngs::StdRng, SeedableRng};

fn bench_catalog_ops(c: &mut Criterion) {
    let catalog = Catalog::new();
    let requests: Vec<RunRequest<'static>> = catalog
        .templates()
        .filter(|t| t.info().category != Category::Bruteforcing)
        .flat_map(|t| {
            let info = t.info();
            info.samples.iter().map(move |s| RunRequest::new(info.id, s.input))
        })
        .collect();

    let mut group = c.benchmark_group("catalog_ops");
    group.bench_function("build", |b| b.iter(Catalog::new));
    group.bench_function("get_template", |b| {
        b.iter(|| catalog.get_template(black_box("11437")).unwrap().info().id)
    });
    group.bench_function("list_templates", |b| {
        b.iter(|| catalog.list_templates(black_box("implementation")).unwrap())
    });
    group.bench_function("pick_hard", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        let selector = Selector {
            category: None,
            difficulty: Difficulty::Hard,
        };
        b.iter(|| catalog.pick(&selector, &mut rng).unwrap())
    });
    group.bench_function("run_batch_samples", |b| {
        b.iter(|| catalog.run_batch(black_box(&requests)))
    });
    group.finish();
}

criterion_group!(benches, bench_catalog_ops);
criterion_main!(benches);
