//! The `k`-th number struck out by the textbook sieve on `2..=n`.

use crate::sieve::Sieve;
use crate::templates::prelude::*;

pub struct KthErased;

static INFO: TemplateInfo = TemplateInfo {
    id: "2960",
    title: "Sieve of Eratosthenes",
    category: Category::Eratosthenes,
    input: &[Field::int("n"), Field::int("k")],
    output: &[Field::int("erased")],
    constraints: &["1 <= k < n <= 1000"],
    samples: &[
        Sample {
            input: "7 3\n",
            output: "6\n",
        },
        Sample {
            input: "15 12\n",
            output: "7\n",
        },
        Sample {
            input: "20 7\n",
            output: "14\n",
        },
    ],
};

impl Template for KthErased {
    type Input = (usize, usize);
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(usize, usize), InputError> {
        let n = sc.next_in("n", 2..=1000usize)?;
        let k = sc.next_in("k", 1..=n - 1)?;
        Ok((n, k))
    }

    fn solve(&self, &(n, k): &(usize, usize)) -> usize {
        // 2..=n are all erased eventually, so k <= n - 1 is always reached
        Sieve::erasure_order(n).get(k - 1).copied().unwrap_or_default()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
