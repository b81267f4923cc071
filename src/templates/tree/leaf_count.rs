//! Leaves left after deleting one node together with its subtree.

use crate::templates::prelude::*;

pub struct LeafCount;

static INFO: TemplateInfo = TemplateInfo {
    id: "1068",
    title: "Tree",
    category: Category::Tree,
    input: &[Field::int("n"), Field::int("parent").repeat("n"), Field::int("removed")],
    output: &[Field::int("leaves")],
    constraints: &[
        "1 <= n <= 50",
        "nodes are 0..n, parent is -1 for the root only",
        "0 <= removed < n",
    ],
    samples: &[
        Sample {
            input: "5\n-1 0 0 1 1\n2\n",
            output: "2\n",
        },
        Sample {
            input: "5\n-1 0 0 1 1\n1\n",
            output: "1\n",
        },
        Sample {
            input: "5\n-1 0 0 1 1\n0\n",
            output: "0\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub parent: Vec<Option<usize>>,
    pub removed: usize,
}

impl Template for LeafCount {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        let parent: Vec<Option<usize>> = (0..n)
            .map(|_| {
                let p: i64 = sc.next_in("parent", -1..=n as i64 - 1)?;
                Ok(usize::try_from(p).ok())
            })
            .collect::<Result<_, InputError>>()?;
        if parent.iter().filter(|p| p.is_none()).count() != 1 {
            return Err(InputError::constraint("parent", "expected exactly one root"));
        }
        let removed = sc.next_in("removed", 0..=n - 1)?;
        Ok(Input { parent, removed })
    }

    fn solve(&self, input: &Input) -> usize {
        let n = input.parent.len();
        // a node is gone if the removed node is on its path to the root
        let gone = |mut v: usize| {
            for _ in 0..=n {
                if v == input.removed {
                    return true;
                }
                match input.parent[v] {
                    Some(p) => v = p,
                    None => return false,
                }
            }
            false
        };
        let alive: Vec<bool> = (0..n).map(|v| !gone(v)).collect();
        let mut has_child = vec![false; n];
        for (v, p) in input.parent.iter().enumerate() {
            if let (true, Some(p)) = (alive[v], *p) {
                has_child[p] = true;
            }
        }
        (0..n).filter(|&v| alive[v] && !has_child[v]).count()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
