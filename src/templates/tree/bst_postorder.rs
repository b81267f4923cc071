//! Post-order of the binary search tree whose pre-order is given.
//!
//! Nodes live in one arena and refer to their children by index.

use std::collections::HashSet;

use crate::templates::prelude::*;

pub struct BstPostorder;

static INFO: TemplateInfo = TemplateInfo {
    id: "5639",
    title: "Binary search tree",
    category: Category::Tree,
    input: &[Field::int("key").until_end()],
    output: &[Field::int("key").until_end()],
    constraints: &["1 to 10000 keys", "1 <= key < 1000000, keys are distinct"],
    samples: &[Sample {
        input: "50\n30\n24\n5\n28\n45\n98\n52\n60\n",
        output: "5\n28\n24\n45\n30\n60\n52\n98\n50\n",
    }],
};

#[derive(Debug, Clone, Copy)]
struct Node {
    key: u32,
    left: Option<usize>,
    right: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Bst {
    nodes: Vec<Node>,
}

impl Bst {
    pub fn insert(&mut self, key: u32) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            key,
            left: None,
            right: None,
        });
        if id == 0 {
            return;
        }
        let mut at = 0;
        loop {
            let node = &mut self.nodes[at];
            let next = if key < node.key { &mut node.left } else { &mut node.right };
            match *next {
                Some(child) => at = child,
                None => {
                    *next = Some(id);
                    return;
                }
            }
        }
    }

    pub fn postorder(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return out;
        }
        // (node, children already pushed)
        let mut stack = vec![(0, false)];
        while let Some((v, expanded)) = stack.pop() {
            let node = self.nodes[v];
            if expanded {
                out.push(node.key);
                continue;
            }
            stack.push((v, true));
            stack.extend(node.right.map(|r| (r, false)));
            stack.extend(node.left.map(|l| (l, false)));
        }
        out
    }
}

impl Template for BstPostorder {
    type Input = Vec<u32>;
    type Output = Vec<u32>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u32>, InputError> {
        let mut keys = Vec::new();
        while sc.has_more() {
            if keys.len() == 10_000 {
                return Err(InputError::constraint("key", "more than 10000 keys"));
            }
            keys.push(sc.next_in("key", 1..=999_999)?);
        }
        if keys.is_empty() {
            return Err(InputError::Missing { field: "key" });
        }
        let mut seen = HashSet::with_capacity(keys.len());
        if let Some(k) = keys.iter().find(|&&k| !seen.insert(k)) {
            return Err(InputError::constraint("key", format!("{k} appears more than once")));
        }
        Ok(keys)
    }

    fn solve(&self, preorder: &Vec<u32>) -> Vec<u32> {
        let mut bst = Bst::default();
        for &k in preorder {
            bst.insert(k);
        }
        bst.postorder()
    }

    fn render(&self, output: &Vec<u32>, out: &mut String) {
        for k in output {
            push_line(out, [k]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_degenerates_to_a_chain() {
        let keys: Vec<u32> = (1..=10_000).collect();
        let post = BstPostorder.solve(&keys);
        assert_eq!(post.first(), Some(&10_000));
        assert_eq!(post.last(), Some(&1));
    }
}
