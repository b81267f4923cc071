use std::collections::VecDeque;

use judge_templates::sieve::{is_prime, Sieve};
use judge_templates::Catalog;
use proptest::prelude::*;

fn maze_reference(rows: &[Vec<bool>]) -> Option<usize> {
    let (n, m) = (rows.len(), rows[0].len());
    if !rows[0][0] {
        return None;
    }
    let mut dist = vec![vec![usize::MAX; m]; n];
    dist[0][0] = 1;
    let mut queue = VecDeque::from([(0usize, 0usize)]);
    while let Some((r, c)) = queue.pop_front() {
        let d = dist[r][c];
        let mut next = Vec::new();
        if r > 0 {
            next.push((r - 1, c));
        }
        if r + 1 < n {
            next.push((r + 1, c));
        }
        if c > 0 {
            next.push((r, c - 1));
        }
        if c + 1 < m {
            next.push((r, c + 1));
        }
        for (nr, nc) in next {
            if rows[nr][nc] && dist[nr][nc] == usize::MAX {
                dist[nr][nc] = d + 1;
                queue.push_back((nr, nc));
            }
        }
    }
    let d = dist[n - 1][m - 1];
    (d != usize::MAX).then_some(d)
}

fn floyd(n: usize, routes: &[(usize, usize, u64)], from: usize, to: usize) -> Option<u64> {
    let mut d = vec![vec![None; n + 1]; n + 1];
    for v in 1..=n {
        d[v][v] = Some(0u64);
    }
    for &(s, e, w) in routes {
        if d[s][e].map_or(true, |best| w < best) {
            d[s][e] = Some(w);
        }
    }
    for k in 1..=n {
        for i in 1..=n {
            for j in 1..=n {
                if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                    if d[i][j].map_or(true, |best| a + b < best) {
                        d[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    d[from][to]
}

fn maze_strategy() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (2usize..8, 2usize..8).prop_flat_map(|(n, m)| {
        prop::collection::vec(prop::collection::vec(prop::bool::weighted(0.7), m), n)
    })
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u64)>, usize, usize)> {
    (2usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((1..=n, 1..=n, 0u64..50), 1..30),
            1..=n,
            1..=n,
        )
    })
}

proptest! {
    #[test]
    fn sieve_agrees_with_trial_division(bound in 0usize..2000) {
        let sieve = Sieve::new(bound);
        for k in 0..=bound {
            prop_assert_eq!(sieve.is_prime(k), is_prime(k as u64), "k = {}", k);
        }
    }

    #[test]
    fn prime_listing_matches_trial_division(m in 1usize..500, span in 0usize..500) {
        let n = m + span;
        let out = Catalog::new().run("1929", &format!("{m} {n}\n")).unwrap();
        let expected: String = (m..=n)
            .filter(|&k| is_prime(k as u64))
            .map(|k| format!("{k}\n"))
            .collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn maze_distance_matches_reference(rows in maze_strategy()) {
        let mut input = format!("{} {}\n", rows.len(), rows[0].len());
        for row in &rows {
            input.extend(row.iter().map(|&open| if open { '1' } else { '0' }));
            input.push('\n');
        }
        let expected = match maze_reference(&rows) {
            Some(d) => format!("{d}\n"),
            None => "-1\n".to_string(),
        };
        prop_assert_eq!(Catalog::new().run("2178", &input).unwrap(), expected);
    }

    #[test]
    fn dijkstra_matches_floyd((n, routes, from, to) in graph_strategy()) {
        let mut input = format!("{n}\n{}\n", routes.len());
        for (s, e, w) in &routes {
            input.push_str(&format!("{s} {e} {w}\n"));
        }
        input.push_str(&format!("{from} {to}\n"));
        let expected = match floyd(n, &routes, from, to) {
            Some(c) => format!("{c}\n"),
            None => "-1\n".to_string(),
        };
        prop_assert_eq!(Catalog::new().run("1916", &input).unwrap(), expected);
    }

    #[test]
    fn pair_count_ignores_input_order(
        (values, shuffled) in prop::collection::hash_set(1u32..200, 1..40)
            .prop_flat_map(|set| {
                let v: Vec<u32> = set.into_iter().collect();
                (Just(v.clone()), Just(v).prop_shuffle())
            }),
        x in 2u32..400,
    ) {
        let render = |v: &[u32]| {
            let body: Vec<String> = v.iter().map(u32::to_string).collect();
            format!("{}\n{}\n{x}\n", v.len(), body.join(" "))
        };
        let catalog = Catalog::new();
        let a = catalog.run("3273", &render(&values)).unwrap();
        let b = catalog.run("3273", &render(&shuffled)).unwrap();
        let brute = (0..values.len())
            .flat_map(|i| (i + 1..values.len()).map(move |j| (i, j)))
            .filter(|&(i, j)| values[i] + values[j] == x)
            .count();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a, format!("{brute}\n"));
    }

    #[test]
    fn frequency_sort_ignores_order_after_first_appearance(
        (values, rest) in prop::collection::vec(1u32..6, 1..30).prop_flat_map(|values| {
            let mut seen = Vec::new();
            let mut rest = Vec::new();
            for &x in &values {
                if seen.contains(&x) {
                    rest.push(x);
                } else {
                    seen.push(x);
                }
            }
            (Just(values), Just(rest).prop_shuffle())
        }),
    ) {
        let render = |v: &[u32]| {
            let body: Vec<String> = v.iter().map(u32::to_string).collect();
            format!("{} 10\n{}\n", v.len(), body.join(" "))
        };
        let mut regrouped = Vec::new();
        for &x in &values {
            if !regrouped.contains(&x) {
                regrouped.push(x);
            }
        }
        regrouped.extend(rest);

        let catalog = Catalog::new();
        let out = catalog.run("2910", &render(&values)).unwrap();
        prop_assert_eq!(&out, &catalog.run("2910", &render(&regrouped)).unwrap());

        let got: Vec<u32> = out.split_whitespace().map(|t| t.parse().unwrap()).collect();
        let count = |v: u32| values.iter().filter(|&&x| x == v).count();
        prop_assert!(got.windows(2).all(|w| count(w[0]) >= count(w[1])));
        let mut sorted_got = got;
        let mut want = values.clone();
        sorted_got.sort_unstable();
        want.sort_unstable();
        prop_assert_eq!(sorted_got, want);
    }

    #[test]
    fn compression_preserves_order(xs in prop::collection::vec(-1_000_000_000i64..=1_000_000_000, 1..60)) {
        let body: Vec<String> = xs.iter().map(i64::to_string).collect();
        let out = Catalog::new()
            .run("18870", &format!("{}\n{}\n", xs.len(), body.join(" ")))
            .unwrap();
        let ranks: Vec<usize> = out.split_whitespace().map(|t| t.parse().unwrap()).collect();
        prop_assert_eq!(ranks.len(), xs.len());
        for i in 0..xs.len() {
            for j in 0..xs.len() {
                prop_assert_eq!(xs[i].cmp(&xs[j]), ranks[i].cmp(&ranks[j]));
            }
        }
        let mut distinct = xs.clone();
        distinct.sort_unstable();
        distinct.dedup();
        for (x, r) in xs.iter().zip(&ranks) {
            prop_assert_eq!(distinct[*r], *x);
        }
    }
}
