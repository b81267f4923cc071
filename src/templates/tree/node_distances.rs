//! Path lengths between queried pairs of tree nodes.

use super::WeightedTree;
use crate::templates::prelude::*;

pub struct NodeDistances;

static INFO: TemplateInfo = TemplateInfo {
    id: "1240",
    title: "Distance between nodes",
    category: Category::Tree,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("edge").repeat("3 * (n - 1)"),
        Field::int("pair").repeat("2 * m"),
    ],
    output: &[Field::int("distance").repeat("m")],
    constraints: &["2 <= n <= 1000", "1 <= m <= 1000", "edge is `a b length` with 1 <= length <= 10000"],
    samples: &[Sample {
        input: "4 2\n2 1 2\n4 3 2\n1 4 3\n1 2\n3 2\n",
        output: "2\n7\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub tree: WeightedTree,
    pub pairs: Vec<(usize, usize)>,
}

impl Template for NodeDistances {
    type Input = Input;
    type Output = Vec<u64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 2..=1000usize)?;
        let m = sc.next_in("m", 1..=1000usize)?;
        let mut tree = WeightedTree::new(n);
        for _ in 1..n {
            let a = sc.next_in("edge", 1..=n)?;
            let b = sc.next_in("edge", 1..=n)?;
            tree.add_edge(a, b, sc.next_in("edge", 1..=10_000u64)?);
        }
        tree.check_tree("edge")?;
        let pairs = (0..m)
            .map(|_| Ok((sc.next_in("pair", 1..=n)?, sc.next_in("pair", 1..=n)?)))
            .collect::<Result<_, InputError>>()?;
        Ok(Input { tree, pairs })
    }

    fn solve(&self, input: &Input) -> Vec<u64> {
        input
            .pairs
            .iter()
            // connectivity is checked in parse
            .map(|&(a, b)| input.tree.distances(a)[b].unwrap_or_default())
            .collect()
    }

    fn render(&self, output: &Vec<u64>, out: &mut String) {
        for d in output {
            push_line(out, [d]);
        }
    }
}
