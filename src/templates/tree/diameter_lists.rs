//! Diameter of a weighted tree given as one adjacency list per vertex.

use super::WeightedTree;
use crate::templates::prelude::*;

pub struct DiameterLists;

static INFO: TemplateInfo = TemplateInfo {
    id: "1167",
    title: "Diameter of a tree (adjacency lists)",
    category: Category::Tree,
    input: &[Field::int("v"), Field::int("list").repeat("v")],
    output: &[Field::int("diameter")],
    constraints: &[
        "2 <= v <= 100000",
        "list is `vertex (neighbour weight)* -1`, one per vertex in any order",
        "1 <= weight <= 10000",
    ],
    samples: &[Sample {
        input: "5\n1 3 2 -1\n2 4 4 -1\n3 1 2 4 3 -1\n4 2 4 3 3 5 6 -1\n5 4 6 -1\n",
        output: "11\n",
    }],
};

impl Template for DiameterLists {
    type Input = WeightedTree;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<WeightedTree, InputError> {
        let n = sc.next_in("v", 2..=100_000usize)?;
        let mut tree = WeightedTree::new(n);
        for _ in 0..n {
            let v = sc.next_in("list", 1..=n)?;
            loop {
                let w: i64 = sc.next_in("list", -1..=n as i64)?;
                if w == -1 {
                    break;
                }
                if w == 0 {
                    return Err(InputError::constraint("list", "vertex 0 does not exist"));
                }
                let cost = sc.next_in("list", 1..=10_000u64)?;
                tree.add_arc(v, w as usize, cost);
            }
        }
        tree.check_tree("list")?;
        Ok(tree)
    }

    fn solve(&self, tree: &WeightedTree) -> u64 {
        tree.diameter(1)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
