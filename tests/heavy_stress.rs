#![cfg(feature = "heavy")]

use judge_templates::Catalog;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::everything());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |p| p.memory() / 1024)
}

fn join<T: ToString>(values: &[T]) -> String {
    values.iter().map(T::to_string).collect::<Vec<_>>().join(" ")
}

#[test]
fn heavy_card_counts_at_full_size() {
    let mut rng = StdRng::seed_from_u64(123);
    let n = 500_000;
    let cards: Vec<i32> = (0..n).map(|_| rng.gen_range(-1000..=1000)).collect();
    let queries: Vec<i32> = (0..n).map(|_| rng.gen_range(-1000..=1000)).collect();
    let input = format!("{n}\n{}\n{n}\n{}\n", join(&cards), join(&queries));
    let out = Catalog::new().run("10816", &input).unwrap();
    let counts: Vec<usize> = out.split_whitespace().map(|t| t.parse().unwrap()).collect();
    assert_eq!(counts.len(), n);
    let total_for = |q: i32| cards.iter().filter(|&&c| c == q).count();
    for i in (0..n).step_by(50_000) {
        assert_eq!(counts[i], total_for(queries[i]));
    }
}

#[test]
fn heavy_prime_listing_to_bound() {
    let mut sys = System::new();
    let before = rss_kib(&mut sys);
    let out = Catalog::new().run("1929", "1 1000000\n").unwrap();
    let after = rss_kib(&mut sys);
    assert_eq!(out.lines().count(), 78_498);
    assert_eq!(out.lines().last(), Some("999983"));
    // a byte per sieve slot plus the rendered list
    assert!(after.saturating_sub(before) < 64 * 1024, "rss grew {} KiB", after - before);
}

#[test]
fn heavy_long_path_tree() {
    let n = 10_000;
    let mut input = format!("{n}\n");
    for v in 1..n {
        input.push_str(&format!("{v} {} 100\n", v + 1));
    }
    let out = Catalog::new().run("1967", &input).unwrap();
    assert_eq!(out, format!("{}\n", (n as u64 - 1) * 100));
}

#[test]
fn heavy_distinct_substrings() {
    let mut rng = StdRng::seed_from_u64(7);
    let s: String = (0..1000).map(|_| rng.gen_range(b'a'..=b'c') as char).collect();
    let out = Catalog::new().run("11478", &format!("{s}\n")).unwrap();
    let mut set = std::collections::HashSet::new();
    for i in 0..s.len() {
        for j in i + 1..=s.len() {
            set.insert(&s[i..j]);
        }
    }
    assert_eq!(out, format!("{}\n", set.len()));
}
