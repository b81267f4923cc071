use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use judge_templates::Catalog;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_maze(rng: &mut StdRng, n: usize, m: usize) -> String {
    let mut input = format!("{n} {m}\n");
    for r in 0..n {
        for c in 0..m {
            let open = (r == 0 && c == 0) || (r == n - 1 && c == m - 1) || rng.gen_bool(0.75);
            input.push(if open { '1' } else { '0' });
        }
        input.push('\n');
    }
    input
}

fn random_routes(rng: &mut StdRng, n: usize, m: usize) -> String {
    let mut input = format!("{n}\n{m}\n");
    for _ in 0..m {
        let s = rng.gen_range(1..=n);
        let e = rng.gen_range(1..=n);
        let w = rng.gen_range(0..=100_000);
        input.push_str(&format!("{s} {e} {w}\n"));
    }
    input.push_str(&format!("1 {n}\n"));
    input
}

fn random_tree(rng: &mut StdRng, n: usize) -> String {
    let mut input = format!("{n}\n");
    for child in 2..=n {
        let parent = rng.gen_range(1..child);
        let w = rng.gen_range(1..=100);
        input.push_str(&format!("{parent} {child} {w}\n"));
    }
    input
}

fn bench_graph_templates(c: &mut Criterion) {
    let catalog = Catalog::new();
    let mut group = c.benchmark_group("graph_templates");

    for &side in &[25usize, 50, 100] {
        group.bench_function(format!("maze_{side}x{side}"), |b| {
            b.iter_batched(
                || random_maze(&mut StdRng::seed_from_u64(42), side, side),
                |input| catalog.run("2178", &input).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    for &(n, m) in &[(100usize, 1_000usize), (1_000, 100_000)] {
        group.bench_function(format!("dijkstra_n{n}_m{m}"), |b| {
            b.iter_batched(
                || random_routes(&mut StdRng::seed_from_u64(7), n, m),
                |input| catalog.run("1916", &input).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }

    group.bench_function("tree_diameter_10000", |b| {
        b.iter_batched(
            || random_tree(&mut StdRng::seed_from_u64(99), 10_000),
            |input| catalog.run("1967", &input).unwrap(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_graph_templates);
criterion_main!(benches);
