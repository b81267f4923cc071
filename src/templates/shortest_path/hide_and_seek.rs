//! Fastest catch on a number line where walking `x ± 1` costs one second and
//! teleporting to `2x` is free.
//!
//! A 0-1 BFS: free moves go to the front of the deque, paid moves to the
//! back, so vertices leave the deque in distance order.

use std::collections::VecDeque;

use crate::templates::prelude::*;

pub struct HideAndSeek;

static INFO: TemplateInfo = TemplateInfo {
    id: "13549",
    title: "Hide and seek 3",
    category: Category::ShortestPath,
    input: &[Field::int("n"), Field::int("k")],
    output: &[Field::int("seconds")],
    constraints: &["0 <= n, k <= 100000"],
    samples: &[
        Sample {
            input: "5 17\n",
            output: "2\n",
        },
        Sample {
            input: "7 7\n",
            output: "0\n",
        },
    ],
};

const LIMIT: usize = 100_000;

impl Template for HideAndSeek {
    type Input = (usize, usize);
    type Output = u32;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(usize, usize), InputError> {
        Ok((sc.next_in("n", 0..=LIMIT)?, sc.next_in("k", 0..=LIMIT)?))
    }

    fn solve(&self, &(start, target): &(usize, usize)) -> u32 {
        let mut dist: Vec<Option<u32>> = vec![None; LIMIT + 1];
        dist[start] = Some(0);
        let mut deque = VecDeque::from([start]);
        while let Some(x) = deque.pop_front() {
            let Some(d) = dist[x] else { continue };
            if x == target {
                return d;
            }
            let moves = [(x * 2, 0), (x.wrapping_sub(1), 1), (x + 1, 1)];
            for (next, cost) in moves {
                if next > LIMIT || dist[next].is_some_and(|best| best <= d + cost) {
                    continue;
                }
                dist[next] = Some(d + cost);
                if cost == 0 {
                    deque.push_front(next);
                } else {
                    deque.push_back(next);
                }
            }
        }
        // walking alone always reaches the target
        start.abs_diff(target) as u32
    }

    fn render(&self, output: &u32, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_is_free_and_walking_back_costs() {
        assert_eq!(HideAndSeek.solve(&(1, 1024)), 0);
        assert_eq!(HideAndSeek.solve(&(1, 1023)), 1);
        assert_eq!(HideAndSeek.solve(&(100, 0)), 100);
        assert_eq!(HideAndSeek.solve(&(0, 3)), 2);
    }
}
