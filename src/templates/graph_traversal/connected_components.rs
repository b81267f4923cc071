//! Number of connected components of an undirected graph.

use crate::templates::prelude::*;

pub struct ConnectedComponents;

static INFO: TemplateInfo = TemplateInfo {
    id: "11724",
    title: "Number of connected components",
    category: Category::GraphTraversal,
    input: &[Field::int("n"), Field::int("m"), Field::int("edge").repeat("2 * m")],
    output: &[Field::int("components")],
    constraints: &["1 <= n <= 1000", "0 <= m <= n * (n - 1) / 2", "1 <= edge endpoints <= n"],
    samples: &[
        Sample {
            input: "6 5\n1 2\n2 5\n5 1\n3 4\n4 6\n",
            output: "2\n",
        },
        Sample {
            input: "6 8\n1 2\n2 5\n5 1\n3 4\n4 6\n5 4\n2 4\n2 3\n",
            output: "1\n",
        },
    ],
};

impl Template for ConnectedComponents {
    /// Adjacency lists, index 0 unused.
    type Input = Vec<Vec<usize>>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<usize>>, InputError> {
        let n = sc.next_in("n", 1..=1000usize)?;
        let m = sc.next_in("m", 0..=n * (n - 1) / 2)?;
        let mut adj = vec![Vec::new(); n + 1];
        for _ in 0..m {
            let a = sc.next_in("edge", 1..=n)?;
            let b = sc.next_in("edge", 1..=n)?;
            adj[a].push(b);
            adj[b].push(a);
        }
        Ok(adj)
    }

    fn solve(&self, adj: &Vec<Vec<usize>>) -> usize {
        let mut seen = vec![false; adj.len()];
        let mut components = 0;
        for root in 1..adj.len() {
            if seen[root] {
                continue;
            }
            components += 1;
            seen[root] = true;
            let mut stack = vec![root];
            while let Some(v) = stack.pop() {
                for &w in &adj[v] {
                    if !seen[w] {
                        seen[w] = true;
                        stack.push(w);
                    }
                }
            }
        }
        components
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_edges_means_every_vertex_alone() {
        assert_eq!(ConnectedComponents.solve(&vec![Vec::new(); 6]), 5);
    }
}
