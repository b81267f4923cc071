//! Number of primes in `(n, 2n]` for each `n` until a terminating `0`.

use crate::sieve::Sieve;
use crate::templates::prelude::*;

pub struct BertrandPostulate;

static INFO: TemplateInfo = TemplateInfo {
    id: "4948",
    title: "Bertrand's postulate",
    category: Category::Eratosthenes,
    input: &[Field::int("n").until("0")],
    output: &[Field::int("primes").until_end()],
    constraints: &["1 <= n <= 123456"],
    samples: &[Sample {
        input: "1\n10\n13\n100\n1000\n10000\n100000\n0\n",
        output: "1\n4\n3\n21\n135\n1033\n8392\n",
    }],
};

const MAX_N: usize = 123_456;

impl Template for BertrandPostulate {
    type Input = Vec<usize>;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<usize>, InputError> {
        let mut ns = Vec::new();
        loop {
            match sc.next_in("n", 0..=MAX_N)? {
                0 => return Ok(ns),
                n => ns.push(n),
            }
        }
    }

    fn solve(&self, ns: &Vec<usize>) -> Vec<usize> {
        let top = ns.iter().copied().max().unwrap_or(0);
        let sieve = Sieve::new(2 * top);
        ns.iter()
            .map(|&n| (n + 1..=2 * n).filter(|&k| sieve.is_prime(k)).count())
            .collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for c in output {
            push_line(out, [c]);
        }
    }
}
