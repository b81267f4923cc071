//! Lowest common ancestor queries, answered by walking both nodes up.

use crate::graph::{read_tree_edges, root_at};
use crate::templates::prelude::*;

pub struct LowestAncestor;

static INFO: TemplateInfo = TemplateInfo {
    id: "11437",
    title: "LCA",
    category: Category::Tree,
    input: &[
        Field::int("n"),
        Field::int("edge").repeat("2 * (n - 1)"),
        Field::int("m"),
        Field::int("pair").repeat("2 * m"),
    ],
    output: &[Field::int("ancestor").repeat("m")],
    constraints: &["2 <= n <= 50000", "1 <= m <= 10000", "the tree is rooted at 1"],
    samples: &[Sample {
        input: "15\n1 2\n1 3\n2 4\n3 7\n6 2\n3 8\n4 9\n2 5\n5 11\n7 13\n10 4\n11 15\n12 5\n14 7\n6\n6 11\n10 9\n2 6\n7 6\n8 13\n8 15\n",
        output: "2\n4\n2\n1\n3\n1\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub adj: Vec<Vec<usize>>,
    pub pairs: Vec<(usize, usize)>,
}

impl Template for LowestAncestor {
    type Input = Input;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 2..=50_000usize)?;
        let adj = read_tree_edges(sc, "edge", n)?;
        let m = sc.next_in("m", 1..=10_000usize)?;
        let pairs = (0..m)
            .map(|_| Ok((sc.next_in("pair", 1..=n)?, sc.next_in("pair", 1..=n)?)))
            .collect::<Result<_, InputError>>()?;
        Ok(Input { adj, pairs })
    }

    fn solve(&self, input: &Input) -> Vec<usize> {
        let (parent, depth) = root_at(&input.adj, 1);
        // the root is its own parent
        let parent: Vec<usize> = parent.iter().enumerate().map(|(v, p)| p.unwrap_or(v)).collect();
        input
            .pairs
            .iter()
            .map(|&(mut a, mut b)| {
                while depth[a] > depth[b] {
                    a = parent[a];
                }
                while depth[b] > depth[a] {
                    b = parent[b];
                }
                while a != b {
                    a = parent[a];
                    b = parent[b];
                }
                a
            })
            .collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for v in output {
            push_line(out, [v]);
        }
    }
}
