//! All primes in `[m, n]`.

use crate::sieve::{is_prime, Sieve};
use crate::templates::prelude::*;

pub struct PrimesInRange;

static INFO: TemplateInfo = TemplateInfo {
    id: "1929",
    title: "Finding primes",
    category: Category::Eratosthenes,
    input: &[Field::int("m"), Field::int("n")],
    output: &[Field::int("prime").until_end()],
    constraints: &["1 <= m <= n <= 1000000", "at least one prime lies in [m, n]"],
    samples: &[Sample {
        input: "3 16\n",
        output: "3\n5\n7\n11\n13\n",
    }],
};

impl Template for PrimesInRange {
    type Input = (usize, usize);
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(usize, usize), InputError> {
        let m = sc.next_in("m", 1..=1_000_000usize)?;
        let n = sc.next_in("n", m..=1_000_000)?;
        if !(m..=n).any(|k| is_prime(k as u64)) {
            return Err(InputError::constraint("n", format!("no prime in [{m}, {n}]")));
        }
        Ok((m, n))
    }

    fn solve(&self, &(m, n): &(usize, usize)) -> Vec<usize> {
        Sieve::new(n).primes().filter(|&p| p >= m).collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for p in output {
            push_line(out, [p]);
        }
    }
}
