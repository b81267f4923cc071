//! Swaps a bubble sort makes on each permutation, i.e. its inversion count.

use crate::templates::prelude::*;

pub struct LadderSwaps;

static INFO: TemplateInfo = TemplateInfo {
    id: "3061",
    title: "Ladder",
    category: Category::Sorting,
    input: &[
        Field::int("t"),
        Field::int("n").repeat("t"),
        Field::int("bottom").repeat("n"),
    ],
    output: &[Field::int("swaps").repeat("t")],
    constraints: &["1 <= t <= 100", "1 <= n <= 1000", "bottom is a permutation of 1..=n"],
    samples: &[Sample {
        input: "2\n8\n1 2 3 5 4 6 7 8\n3\n3 2 1\n",
        output: "1\n3\n",
    }],
};

impl Template for LadderSwaps {
    type Input = Vec<Vec<usize>>;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<usize>>, InputError> {
        let t = sc.next_in("t", 1..=100usize)?;
        (0..t)
            .map(|_| {
                let n = sc.next_in("n", 1..=1000usize)?;
                let perm = sc.values_in("bottom", n, 1..=n)?;
                let mut seen = vec![false; n + 1];
                if perm.iter().any(|&v| std::mem::replace(&mut seen[v], true)) {
                    return Err(InputError::constraint("bottom", "not a permutation"));
                }
                Ok(perm)
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<Vec<usize>>) -> Vec<usize> {
        cases
            .iter()
            .map(|p| {
                (0..p.len())
                    .map(|i| p[i + 1..].iter().filter(|&&later| later < p[i]).count())
                    .sum()
            })
            .collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for s in output {
            push_line(out, [s]);
        }
    }
}
