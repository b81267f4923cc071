//! Level of greatest width when a binary tree is drawn with one column per
//! node in in-order. Ties go to the shallower level.

use crate::templates::prelude::*;

pub struct WidestLevel;

static INFO: TemplateInfo = TemplateInfo {
    id: "2250",
    title: "Height and width of a tree",
    category: Category::Tree,
    input: &[Field::int("n"), Field::int("node").repeat("3 * n")],
    output: &[Field::int("level"), Field::int("width")],
    constraints: &[
        "1 <= n <= 10000",
        "node is `v left right` over 1..=n with -1 for a missing child",
        "the root is the only node that is nobody's child",
    ],
    samples: &[Sample {
        input: "19\n1 2 3\n2 4 5\n3 6 7\n4 8 -1\n5 9 10\n6 11 12\n7 13 -1\n8 -1 -1\n9 14 15\n10 -1 -1\n11 16 -1\n12 -1 -1\n13 17 -1\n14 -1 -1\n15 18 -1\n16 -1 -1\n17 -1 19\n18 -1 -1\n19 -1 -1\n",
        output: "3 18\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub root: usize,
    pub children: Vec<[Option<usize>; 2]>,
}

impl Template for WidestLevel {
    type Input = Input;
    type Output = (usize, usize);

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=10_000usize)?;
        let mut children = vec![[None, None]; n + 1];
        let mut has_parent = vec![false; n + 1];
        for _ in 0..n {
            let v = sc.next_in("node", 1..=n)?;
            for slot in 0..2 {
                let c: i64 = sc.next_in("node", -1..=n as i64)?;
                if c == 0 {
                    return Err(InputError::constraint("node", "node 0 does not exist"));
                }
                let child = usize::try_from(c).ok();
                if let Some(c) = child {
                    if std::mem::replace(&mut has_parent[c], true) {
                        return Err(InputError::constraint("node", format!("{c} has two parents")));
                    }
                }
                children[v][slot] = child;
            }
        }
        let mut roots = (1..=n).filter(|&v| !has_parent[v]);
        match (roots.next(), roots.next()) {
            (Some(root), None) => Ok(Input { root, children }),
            _ => Err(InputError::constraint("node", "expected exactly one root")),
        }
    }

    fn solve(&self, input: &Input) -> (usize, usize) {
        // per level: (leftmost column, rightmost column)
        let mut span: Vec<(usize, usize)> = Vec::new();
        let mut column = 0;
        let mut stack: Vec<(usize, usize)> = Vec::new();
        let mut cur = Some((input.root, 0));
        // iterative in-order
        loop {
            while let Some((v, depth)) = cur {
                stack.push((v, depth));
                cur = input.children[v][0].map(|c| (c, depth + 1));
            }
            let Some((v, depth)) = stack.pop() else { break };
            column += 1;
            if depth == span.len() {
                span.push((column, column));
            } else {
                span[depth].1 = column;
            }
            cur = input.children[v][1].map(|c| (c, depth + 1));
        }
        span.iter()
            .enumerate()
            .map(|(level, &(lo, hi))| (level + 1, hi - lo + 1))
            .fold((1, 0), |best, cand| if cand.1 > best.1 { cand } else { best })
    }

    fn render(&self, &(level, width): &(usize, usize), out: &mut String) {
        push_line(out, [level, width]);
    }
}
