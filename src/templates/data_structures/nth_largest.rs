//! N-th largest of `n * n` numbers with a min-heap capped at `n` entries.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::templates::prelude::*;

pub struct NthLargest;

static INFO: TemplateInfo = TemplateInfo {
    id: "2075",
    title: "N-th largest number",
    category: Category::DataStructures,
    input: &[Field::int("n"), Field::int("value").repeat("n * n")],
    output: &[Field::int("nth")],
    constraints: &["1 <= n <= 1500", "values fit in a signed 32-bit integer"],
    samples: &[Sample {
        input: "5\n12 7 9 15 5\n13 8 11 19 6\n21 10 26 31 16\n48 14 28 35 25\n52 20 32 41 49\n",
        output: "35\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub n: usize,
    pub values: Vec<i32>,
}

impl Template for NthLargest {
    type Input = Input;
    type Output = i32;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1500usize)?;
        let values = sc.values("value", n * n)?;
        Ok(Input { n, values })
    }

    fn solve(&self, input: &Input) -> i32 {
        let mut heap = BinaryHeap::with_capacity(input.n + 1);
        for &v in &input.values {
            heap.push(Reverse(v));
            if heap.len() > input.n {
                heap.pop();
            }
        }
        heap.peek().map_or(0, |Reverse(v)| *v)
    }

    fn render(&self, output: &i32, out: &mut String) {
        push_line(out, [output]);
    }
}
