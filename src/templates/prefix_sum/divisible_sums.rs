//! Contiguous subarrays whose sum is divisible by `m`.
//!
//! Two prefixes with the same remainder bound such a subarray, so the answer
//! is the number of equal-remainder prefix pairs (the empty prefix included).

use crate::templates::prelude::*;

pub struct DivisibleSums;

static INFO: TemplateInfo = TemplateInfo {
    id: "10986",
    title: "Remainder sum",
    category: Category::PrefixSum,
    input: &[Field::int("n"), Field::int("m"), Field::int("a").repeat("n")],
    output: &[Field::int("count")],
    constraints: &["1 <= n <= 1000000", "2 <= m <= 1000", "0 <= a <= 1000000000"],
    samples: &[Sample {
        input: "5 3\n1 2 3 1 2\n",
        output: "7\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub modulus: u64,
    pub a: Vec<u64>,
}

impl Template for DivisibleSums {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1_000_000usize)?;
        let modulus = sc.next_in("m", 2..=1000u64)?;
        let a = sc.values_in("a", n, 0..=1_000_000_000)?;
        Ok(Input { modulus, a })
    }

    fn solve(&self, input: &Input) -> u64 {
        let mut seen = vec![0u64; input.modulus as usize];
        seen[0] = 1;
        let mut rem = 0;
        for &v in &input.a {
            rem = (rem + v) % input.modulus;
            seen[rem as usize] += 1;
        }
        seen.iter().map(|&c| c * c.saturating_sub(1) / 2).sum()
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
