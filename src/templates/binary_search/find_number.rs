//! Membership queries against a sorted array.

use crate::templates::prelude::*;

pub struct FindNumber;

static INFO: TemplateInfo = TemplateInfo {
    id: "1920",
    title: "Find a number",
    category: Category::BinarySearch,
    input: &[
        Field::int("n"),
        Field::int("a").repeat("n"),
        Field::int("m"),
        Field::int("query").repeat("m"),
    ],
    output: &[Field::int("present").repeat("m")],
    constraints: &["1 <= n, m <= 100000", "values fit in a signed 32-bit integer"],
    samples: &[Sample {
        input: "5\n4 1 5 2 3\n5\n1 3 7 9 5\n",
        output: "1\n1\n0\n0\n1\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub values: Vec<i32>,
    pub queries: Vec<i32>,
}

impl Template for FindNumber {
    type Input = Input;
    type Output = Vec<bool>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let values = sc.values("a", n)?;
        let m = sc.next_in("m", 1..=100_000usize)?;
        let queries = sc.values("query", m)?;
        Ok(Input { values, queries })
    }

    fn solve(&self, input: &Input) -> Vec<bool> {
        let mut sorted = input.values.clone();
        sorted.sort_unstable();
        input
            .queries
            .iter()
            .map(|q| sorted.binary_search(q).is_ok())
            .collect()
    }

    fn render(&self, output: &Vec<bool>, out: &mut String) {
        for &found in output {
            out.push_str(if found { "1\n" } else { "0\n" });
        }
    }
}
