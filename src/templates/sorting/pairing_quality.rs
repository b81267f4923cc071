//! Pair up goods so that each pair is valued at twice its cheaper item's
//! price, and maximise the total. A lone item is valued at its own price.
//!
//! Pairing the i-th cheapest with the i-th most expensive lets every item of
//! the upper half count twice; with an odd count the median stands alone.

use crate::templates::prelude::*;

pub struct PairingQuality;

static INFO: TemplateInfo = TemplateInfo {
    id: "20117",
    title: "Hobanu merchant's strange quality formula",
    category: Category::Sorting,
    input: &[Field::int("n"), Field::int("quality").repeat("n")],
    output: &[Field::int("total")],
    constraints: &["1 <= n <= 100000", "1 <= quality <= 1000"],
    samples: &[
        Sample {
            input: "3\n1 2 3\n",
            output: "8\n",
        },
        Sample {
            input: "4\n4 1 5 9\n",
            output: "28\n",
        },
    ],
};

impl Template for PairingQuality {
    type Input = Vec<u64>;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u64>, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        sc.values_in("quality", n, 1..=1000)
    }

    fn solve(&self, quality: &Vec<u64>) -> u64 {
        let mut q = quality.clone();
        q.sort_unstable();
        let half = q.len() / 2;
        let doubled: u64 = q[half..].iter().map(|v| 2 * v).sum();
        if q.len() % 2 == 1 {
            doubled - q[half]
        } else {
            doubled
        }
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
