//! Most disjoint pairs with an odd gcd: odd–even pairs first, then odd–odd.

use crate::templates::prelude::*;

pub struct OddGcdMatching;

static INFO: TemplateInfo = TemplateInfo {
    id: "21032",
    title: "Odd GCD matching",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("a").repeat("n")],
    output: &[Field::int("pairs")],
    constraints: &["1 <= n <= 100000", "1 <= a <= 1000000000"],
    samples: &[
        Sample {
            input: "5\n1 2 3 4 5\n",
            output: "2\n",
        },
        Sample {
            input: "4\n1 3 5 7\n",
            output: "2\n",
        },
    ],
};

impl Template for OddGcdMatching {
    type Input = Vec<u64>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u64>, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        sc.values_in("a", n, 1..=1_000_000_000)
    }

    fn solve(&self, a: &Vec<u64>) -> usize {
        let odd = a.iter().filter(|&&v| v % 2 == 1).count();
        let even = a.len() - odd;
        let mixed = odd.min(even);
        mixed + (odd - mixed) / 2
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
