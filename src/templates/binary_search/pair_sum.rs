//! Pairs of distinct values adding up to `x`, counted with two pointers.

use crate::templates::prelude::*;

pub struct PairSum;

static INFO: TemplateInfo = TemplateInfo {
    id: "3273",
    title: "Sum of two numbers",
    category: Category::BinarySearch,
    input: &[Field::int("n"), Field::int("a").repeat("n"), Field::int("x")],
    output: &[Field::int("pairs")],
    constraints: &[
        "1 <= n <= 100000",
        "1 <= a <= 1000000, values distinct",
        "1 <= x <= 2000000",
    ],
    samples: &[Sample {
        input: "9\n5 12 7 10 9 1 2 3 11\n13\n",
        output: "3\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub values: Vec<u32>,
    pub target: u32,
}

impl Template for PairSum {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let values = sc.values_in("a", n, 1..=1_000_000u32)?;
        let mut sorted = values.clone();
        sorted.sort_unstable();
        if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
            return Err(InputError::constraint("a", format!("{} appears more than once", w[0])));
        }
        let target = sc.next_in("x", 1..=2_000_000u32)?;
        Ok(Input { values, target })
    }

    fn solve(&self, input: &Input) -> usize {
        let mut v = input.values.clone();
        v.sort_unstable();
        let (mut l, mut r) = (0usize, v.len().saturating_sub(1));
        let mut count = 0;
        while l < r {
            match (v[l] + v[r]).cmp(&input.target) {
                std::cmp::Ordering::Equal => {
                    count += 1;
                    l += 1;
                }
                std::cmp::Ordering::Less => l += 1,
                std::cmp::Ordering::Greater => r -= 1,
            }
        }
        count
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
