//! Replace each coordinate with the number of distinct smaller coordinates.

use crate::templates::prelude::*;

pub struct CoordinateCompression;

static INFO: TemplateInfo = TemplateInfo {
    id: "18870",
    title: "Coordinate compression",
    category: Category::Sorting,
    input: &[Field::int("n"), Field::int("x").repeat("n")],
    output: &[Field::int("rank").repeat("n")],
    constraints: &["1 <= n <= 1000000", "-1000000000 <= x <= 1000000000"],
    samples: &[Sample {
        input: "5\n2 4 -10 4 -9\n",
        output: "2 3 0 3 1\n",
    }],
};

impl Template for CoordinateCompression {
    type Input = Vec<i64>;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<i64>, InputError> {
        let n = sc.next_in("n", 1..=1_000_000usize)?;
        sc.values_in("x", n, -1_000_000_000..=1_000_000_000)
    }

    fn solve(&self, xs: &Vec<i64>) -> Vec<usize> {
        let mut distinct = xs.clone();
        distinct.sort_unstable();
        distinct.dedup();
        xs.iter().map(|x| distinct.partition_point(|d| d < x)).collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        push_line(out, output);
    }
}
