//! Diameter of a weighted rooted tree given as parent-child edges.

use super::WeightedTree;
use crate::templates::prelude::*;

pub struct Diameter;

static INFO: TemplateInfo = TemplateInfo {
    id: "1967",
    title: "Diameter of a tree",
    category: Category::Tree,
    input: &[Field::int("n"), Field::int("edge").repeat("3 * (n - 1)")],
    output: &[Field::int("diameter")],
    constraints: &[
        "1 <= n <= 10000",
        "edge is `parent child weight` with 1 <= weight <= 100",
        "the root is 1",
    ],
    samples: &[
        Sample {
            input: "12\n1 2 3\n1 3 2\n2 4 5\n3 5 11\n3 6 9\n4 7 1\n4 8 7\n5 9 15\n5 10 4\n6 11 6\n6 12 10\n",
            output: "45\n",
        },
        Sample {
            input: "1\n",
            output: "0\n",
        },
    ],
};

impl Template for Diameter {
    type Input = WeightedTree;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<WeightedTree, InputError> {
        let n = sc.next_in("n", 1..=10_000usize)?;
        let mut tree = WeightedTree::new(n);
        for _ in 1..n {
            let parent = sc.next_in("edge", 1..=n)?;
            let child = sc.next_in("edge", 1..=n)?;
            let weight = sc.next_in("edge", 1..=100u64)?;
            tree.add_edge(parent, child, weight);
        }
        tree.check_tree("edge")?;
        Ok(tree)
    }

    fn solve(&self, tree: &WeightedTree) -> u64 {
        tree.diameter(1)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
