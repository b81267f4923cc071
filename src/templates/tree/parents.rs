//! Parent of every node when the tree is rooted at 1.

use crate::graph::{read_tree_edges, root_at};
use crate::templates::prelude::*;

pub struct Parents;

static INFO: TemplateInfo = TemplateInfo {
    id: "11725",
    title: "Find the parents in a tree",
    category: Category::Tree,
    input: &[Field::int("n"), Field::int("edge").repeat("2 * (n - 1)")],
    output: &[Field::int("parent").repeat("n - 1")],
    constraints: &["2 <= n <= 100000", "the edges form a tree"],
    samples: &[Sample {
        input: "7\n1 6\n6 3\n3 5\n4 1\n2 4\n4 7\n",
        output: "4\n6\n1\n3\n1\n4\n",
    }],
};

impl Template for Parents {
    type Input = Vec<Vec<usize>>;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<usize>>, InputError> {
        let n = sc.next_in("n", 2..=100_000usize)?;
        read_tree_edges(sc, "edge", n)
    }

    fn solve(&self, adj: &Vec<Vec<usize>>) -> Vec<usize> {
        let (parent, _) = root_at(adj, 1);
        parent.into_iter().skip(2).flatten().collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for p in output {
            push_line(out, [p]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_parents() {
        let adj = read_tree_edges(&mut Scanner::new("2 1\n3 1\n1 4\n"), "edge", 4).unwrap();
        assert_eq!(Parents.solve(&adj), vec![1, 1, 1]);
    }
}
