//! `sum over k <= n of sigma(k)`, where `sigma` is the divisor sum.

use crate::templates::prelude::*;

pub struct DivisorSums;

static INFO: TemplateInfo = TemplateInfo {
    id: "17427",
    title: "Sum of divisors 2",
    category: Category::Math,
    input: &[Field::int("n")],
    output: &[Field::int("total")],
    constraints: &["1 <= n <= 1000000"],
    samples: &[
        Sample {
            input: "1\n",
            output: "1\n",
        },
        Sample {
            input: "10\n",
            output: "87\n",
        },
        Sample {
            input: "1000000\n",
            output: "822468118437\n",
        },
    ],
};

impl Template for DivisorSums {
    type Input = u64;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<u64, InputError> {
        sc.next_in("n", 1..=1_000_000)
    }

    /// Each `d` divides exactly `n / d` of the numbers up to `n`.
    fn solve(&self, &n: &u64) -> u64 {
        (1..=n).map(|d| d * (n / d)).sum()
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
