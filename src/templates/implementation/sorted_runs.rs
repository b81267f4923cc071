//! Number of strictly increasing contiguous subarrays.

use crate::templates::prelude::*;

pub struct SortedRuns;

static INFO: TemplateInfo = TemplateInfo {
    id: "31395",
    title: "Sorted contiguous subsequences",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("a").repeat("n")],
    output: &[Field::int("count")],
    constraints: &["1 <= n <= 200000", "1 <= a <= 1000000000"],
    samples: &[
        Sample {
            input: "4\n1 2 3 2\n",
            output: "7\n",
        },
        Sample {
            input: "5\n5 4 3 2 1\n",
            output: "5\n",
        },
    ],
};

impl Template for SortedRuns {
    type Input = Vec<u64>;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u64>, InputError> {
        let n = sc.next_in("n", 1..=200_000usize)?;
        sc.values_in("a", n, 1..=1_000_000_000)
    }

    fn solve(&self, a: &Vec<u64>) -> u64 {
        let mut run = 0;
        let mut prev = 0;
        let mut total = 0;
        // a run of length r ending here adds r subarrays
        for &v in a {
            run = if prev < v { run + 1 } else { 1 };
            prev = v;
            total += run;
        }
        total
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
