//! Depth-first and breadth-first visit orders from a start vertex, always
//! taking the smaller-numbered neighbour first.

use std::collections::VecDeque;

use crate::templates::prelude::*;

pub struct DfsBfs;

static INFO: TemplateInfo = TemplateInfo {
    id: "1260",
    title: "DFS and BFS",
    category: Category::GraphTheory,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("start"),
        Field::int("edge").repeat("2 * m"),
    ],
    output: &[Field::int("dfs_order").until_end(), Field::int("bfs_order").until_end()],
    constraints: &["1 <= n <= 1000", "1 <= m <= 10000", "1 <= start, edge endpoints <= n"],
    samples: &[
        Sample {
            input: "4 5 1\n1 2\n1 3\n1 4\n2 4\n3 4\n",
            output: "1 2 4 3\n1 2 3 4\n",
        },
        Sample {
            input: "5 5 3\n5 4\n5 2\n1 2\n3 4\n3 1\n",
            output: "3 1 2 5 4\n3 1 4 2 5\n",
        },
        Sample {
            input: "1000 1 1000\n999 1000\n",
            output: "1000 999\n1000 999\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    /// Sorted adjacency lists, index 0 unused.
    pub adj: Vec<Vec<usize>>,
    pub start: usize,
}

impl Template for DfsBfs {
    type Input = Input;
    type Output = (Vec<usize>, Vec<usize>);

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1000usize)?;
        let m = sc.next_in("m", 1..=10_000usize)?;
        let start = sc.next_in("start", 1..=n)?;
        let mut adj = vec![Vec::new(); n + 1];
        for _ in 0..m {
            let a = sc.next_in("edge", 1..=n)?;
            let b = sc.next_in("edge", 1..=n)?;
            adj[a].push(b);
            adj[b].push(a);
        }
        adj.iter_mut().for_each(|l| l.sort_unstable());
        Ok(Input { adj, start })
    }

    fn solve(&self, input: &Input) -> (Vec<usize>, Vec<usize>) {
        let n = input.adj.len();

        let mut seen = vec![false; n];
        let mut dfs = Vec::new();
        let mut stack = vec![input.start];
        while let Some(v) = stack.pop() {
            if seen[v] {
                continue;
            }
            seen[v] = true;
            dfs.push(v);
            // reversed so the smallest neighbour is popped first
            stack.extend(input.adj[v].iter().rev().filter(|&&w| !seen[w]));
        }

        let mut seen = vec![false; n];
        let mut bfs = Vec::new();
        let mut queue = VecDeque::from([input.start]);
        seen[input.start] = true;
        while let Some(v) = queue.pop_front() {
            bfs.push(v);
            for &w in &input.adj[v] {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        (dfs, bfs)
    }

    fn render(&self, (dfs, bfs): &(Vec<usize>, Vec<usize>), out: &mut String) {
        push_line(out, dfs);
        push_line(out, bfs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_start_visits_itself_only() {
        let input = Input {
            adj: vec![vec![], vec![], vec![3], vec![2]],
            start: 1,
        };
        assert_eq!(DfsBfs.solve(&input), (vec![1], vec![1]));
    }
}
