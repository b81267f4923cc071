//! Tasks that must be finished, directly or transitively, before a given task.

use crate::templates::prelude::*;

pub struct Prerequisites;

static INFO: TemplateInfo = TemplateInfo {
    id: "21937",
    title: "Work",
    category: Category::GraphTraversal,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("order").repeat("2 * m"),
        Field::int("target"),
    ],
    output: &[Field::int("before")],
    constraints: &[
        "1 <= n, m <= 100000",
        "each order `a b` means a must be done before b, 1 <= a, b <= n",
        "the orders contain no cycle",
    ],
    samples: &[Sample {
        input: "6 6\n1 2\n2 4\n1 3\n3 4\n4 5\n5 6\n4\n",
        output: "3\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    /// `required[b]` lists every `a` that must precede `b`.
    pub required: Vec<Vec<usize>>,
    pub target: usize,
}

impl Template for Prerequisites {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let m = sc.next_in("m", 1..=100_000usize)?;
        let mut required = vec![Vec::new(); n + 1];
        for _ in 0..m {
            let a = sc.next_in("order", 1..=n)?;
            let b = sc.next_in("order", 1..=n)?;
            required[b].push(a);
        }
        let target = sc.next_in("target", 1..=n)?;
        Ok(Input { required, target })
    }

    fn solve(&self, input: &Input) -> usize {
        let mut seen = vec![false; input.required.len()];
        seen[input.target] = true;
        let mut stack = vec![input.target];
        let mut count = 0;
        while let Some(v) = stack.pop() {
            for &w in &input.required[v] {
                if !seen[w] {
                    seen[w] = true;
                    count += 1;
                    stack.push(w);
                }
            }
        }
        count
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
