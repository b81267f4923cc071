//! Entry `k` of row `n` of Pascal's triangle, both 1-based.

use crate::templates::prelude::*;

pub struct PascalTriangle;

static INFO: TemplateInfo = TemplateInfo {
    id: "16395",
    title: "Pascal's triangle",
    category: Category::Dp,
    input: &[Field::int("n"), Field::int("k")],
    output: &[Field::int("entry")],
    constraints: &["1 <= k <= n <= 30"],
    samples: &[
        Sample {
            input: "5 3\n",
            output: "6\n",
        },
        Sample {
            input: "30 15\n",
            output: "77558760\n",
        },
    ],
};

impl Template for PascalTriangle {
    type Input = (usize, usize);
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(usize, usize), InputError> {
        let n = sc.next_in("n", 1..=30usize)?;
        let k = sc.next_in("k", 1..=n)?;
        Ok((n, k))
    }

    fn solve(&self, &(n, k): &(usize, usize)) -> u64 {
        let mut row = vec![1u64];
        for _ in 1..n {
            let mut next = Vec::with_capacity(row.len() + 1);
            next.push(1);
            next.extend(row.windows(2).map(|w| w[0] + w[1]));
            next.push(1);
            row = next;
        }
        row[k - 1]
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
