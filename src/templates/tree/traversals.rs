//! Pre-, in- and post-order of a binary tree labelled with letters from `A`.

use crate::templates::prelude::*;

pub struct Traversals;

static INFO: TemplateInfo = TemplateInfo {
    id: "1991",
    title: "Tree traversal",
    category: Category::Tree,
    input: &[Field::int("n"), Field::word("node").repeat("3 * n")],
    output: &[Field::word("order").repeat("3")],
    constraints: &[
        "1 <= n <= 26",
        "node is `label left right` with `.` for a missing child",
        "labels are the first n capital letters and A is the root",
    ],
    samples: &[Sample {
        input: "7\nA B C\nB D .\nC E F\nE . .\nF . G\nD . .\nG . .\n",
        output: "ABDCEFG\nDBAECFG\nDBEGFCA\n",
    }],
};

#[derive(Debug, Clone, Copy, Default)]
pub struct Node {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

fn walk(tree: &[Node], v: Option<usize>, order: Order, out: &mut String) {
    let Some(v) = v else { return };
    let label = char::from(b'A' + v as u8);
    if let Order::Pre = order {
        out.push(label);
    }
    walk(tree, tree[v].left, order, out);
    if let Order::In = order {
        out.push(label);
    }
    walk(tree, tree[v].right, order, out);
    if let Order::Post = order {
        out.push(label);
    }
}

impl Template for Traversals {
    type Input = Vec<Node>;
    type Output = [String; 3];

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Node>, InputError> {
        let n = sc.next_in("n", 1..=26usize)?;
        let label = |sc: &mut Scanner<'_>| -> Result<Option<usize>, InputError> {
            let b = sc.word_of_len("node", 1)?.as_bytes()[0];
            match b {
                b'.' => Ok(None),
                b'A'..=b'Z' if usize::from(b - b'A') < n => Ok(Some(usize::from(b - b'A'))),
                _ => Err(InputError::constraint("node", format!("unknown label {:?}", b as char))),
            }
        };
        let mut tree = vec![Node::default(); n];
        let mut has_parent = vec![false; n];
        for _ in 0..n {
            let v = label(sc)?.ok_or_else(|| InputError::constraint("node", "a node cannot be `.`"))?;
            let node = Node {
                left: label(sc)?,
                right: label(sc)?,
            };
            for child in [node.left, node.right].into_iter().flatten() {
                if child == 0 || std::mem::replace(&mut has_parent[child], true) {
                    return Err(InputError::constraint("node", "not a tree rooted at A"));
                }
            }
            tree[v] = node;
        }
        Ok(tree)
    }

    fn solve(&self, tree: &Vec<Node>) -> [String; 3] {
        [Order::Pre, Order::In, Order::Post].map(|order| {
            let mut s = String::with_capacity(tree.len());
            walk(tree, Some(0), order, &mut s);
            s
        })
    }

    fn render(&self, output: &[String; 3], out: &mut String) {
        for line in output {
            push_line(out, [line]);
        }
    }
}
