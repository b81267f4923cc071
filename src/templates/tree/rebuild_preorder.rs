//! Pre-order of a binary tree over `1..=n` rebuilt from its in-order and
//! post-order.
//!
//! The last post-order value is the root; its in-order position splits both
//! sequences into the left and right subtrees. Ranges are kept on an explicit
//! stack, so a degenerate tree does not recurse `n` deep.

use crate::templates::prelude::*;

pub struct RebuildPreorder;

static INFO: TemplateInfo = TemplateInfo {
    id: "2263",
    title: "Tree traversal orders",
    category: Category::Tree,
    input: &[
        Field::int("n"),
        Field::int("inorder").repeat("n"),
        Field::int("postorder").repeat("n"),
    ],
    output: &[Field::int("preorder").repeat("n")],
    constraints: &["1 <= n <= 100000", "both orders are permutations of 1..=n describing one tree"],
    samples: &[Sample {
        input: "3\n1 2 3\n1 3 2\n",
        output: "2 1 3\n",
    }],
};

/// Binary tree as child links, `None` for a missing child.
#[derive(Debug, Clone)]
pub struct Tree {
    pub root: usize,
    pub children: Vec<[Option<usize>; 2]>,
}

fn permutation(sc: &mut Scanner<'_>, field: &'static str, n: usize) -> Result<Vec<usize>, InputError> {
    let values = sc.values_in(field, n, 1..=n)?;
    let mut seen = vec![false; n + 1];
    if values.iter().any(|&v| std::mem::replace(&mut seen[v], true)) {
        return Err(InputError::constraint(field, "not a permutation"));
    }
    Ok(values)
}

impl Template for RebuildPreorder {
    type Input = Tree;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Tree, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let inorder = permutation(sc, "inorder", n)?;
        let postorder = permutation(sc, "postorder", n)?;
        let mut at = vec![0; n + 1];
        for (i, &v) in inorder.iter().enumerate() {
            at[v] = i;
        }

        let mut children = vec![[None, None]; n + 1];
        let root = postorder[n - 1];
        // (in-order start, post-order start, size, parent slot to fill)
        let mut pending = vec![(0usize, 0usize, n, None::<(usize, usize)>)];
        while let Some((ins, posts, size, slot)) = pending.pop() {
            if size == 0 {
                continue;
            }
            let v = postorder[posts + size - 1];
            let split = at[v];
            if split < ins || split >= ins + size {
                return Err(InputError::constraint("postorder", "orders describe no binary tree"));
            }
            if let Some((parent, side)) = slot {
                children[parent][side] = Some(v);
            }
            let left = split - ins;
            pending.push((split + 1, posts + left, size - left - 1, Some((v, 1))));
            pending.push((ins, posts, left, Some((v, 0))));
        }
        Ok(Tree { root, children })
    }

    fn solve(&self, tree: &Tree) -> Vec<usize> {
        let mut order = Vec::with_capacity(tree.children.len());
        let mut stack = vec![tree.root];
        while let Some(v) = stack.pop() {
            order.push(v);
            let [left, right] = tree.children[v];
            stack.extend(right);
            stack.extend(left);
        }
        order
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        push_line(out, output);
    }
}

#[cfg(test)]
mod tests {
    use crate::Catalog;

    #[test]
    fn inconsistent_orders_are_rejected() {
        let catalog = Catalog::new();
        assert_eq!(catalog.run("2263", "4\n4 3 2 1\n4 3 2 1\n").unwrap(), "1 2 3 4\n");
        assert!(catalog.run("2263", "3\n1 2 3\n3 1 2\n").is_err());
    }
}
