//! Largest sum of a strictly decreasing subsequence.

use crate::templates::prelude::*;

pub struct DecreasingSubsequence;

static INFO: TemplateInfo = TemplateInfo {
    id: "17216",
    title: "Largest decreasing subsequence",
    category: Category::Dp,
    input: &[Field::int("n"), Field::int("a").repeat("n")],
    output: &[Field::int("best")],
    constraints: &["1 <= n <= 1000", "1 <= a <= 1000"],
    samples: &[Sample {
        input: "10\n1 100 2 50 60 8 7 3 6 5\n",
        output: "186\n",
    }],
};

impl Template for DecreasingSubsequence {
    type Input = Vec<u64>;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u64>, InputError> {
        let n = sc.next_in("n", 1..=1000usize)?;
        sc.values_in("a", n, 1..=1000u64)
    }

    fn solve(&self, a: &Vec<u64>) -> u64 {
        // best[i]: largest sum of a decreasing subsequence ending at i
        let mut best = a.clone();
        for i in 0..a.len() {
            for j in 0..i {
                if a[j] > a[i] {
                    best[i] = best[i].max(best[j] + a[i]);
                }
            }
        }
        best.into_iter().max().unwrap_or(0)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
