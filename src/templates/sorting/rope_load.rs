//! Heaviest weight a subset of ropes can lift when the load is shared evenly.

use crate::templates::prelude::*;

pub struct RopeLoad;

static INFO: TemplateInfo = TemplateInfo {
    id: "2217",
    title: "Ropes",
    category: Category::Sorting,
    input: &[Field::int("n"), Field::int("limit").repeat("n")],
    output: &[Field::int("weight")],
    constraints: &["1 <= n <= 100000", "1 <= limit <= 10000"],
    samples: &[Sample {
        input: "2\n10\n15\n",
        output: "20\n",
    }],
};

impl Template for RopeLoad {
    type Input = Vec<u64>;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u64>, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        sc.values_in("limit", n, 1..=10_000)
    }

    fn solve(&self, limits: &Vec<u64>) -> u64 {
        let mut sorted = limits.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        // using the k strongest ropes, the weakest of them bounds each share
        sorted
            .iter()
            .enumerate()
            .map(|(i, &l)| l * (i as u64 + 1))
            .max()
            .unwrap_or(0)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
