//! Ways to write `n` as a sum of consecutive primes, counted with a sliding
//! window over the prime list.

use crate::sieve::Sieve;
use crate::templates::prelude::*;

pub struct ConsecutivePrimes;

static INFO: TemplateInfo = TemplateInfo {
    id: "1644",
    title: "Sum of consecutive primes",
    category: Category::Eratosthenes,
    input: &[Field::int("n")],
    output: &[Field::int("ways")],
    constraints: &["1 <= n <= 4000000"],
    samples: &[
        Sample {
            input: "20\n",
            output: "0\n",
        },
        Sample {
            input: "3\n",
            output: "1\n",
        },
        Sample {
            input: "41\n",
            output: "3\n",
        },
        Sample {
            input: "53\n",
            output: "2\n",
        },
    ],
};

impl Template for ConsecutivePrimes {
    type Input = usize;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<usize, InputError> {
        sc.next_in("n", 1..=4_000_000usize)
    }

    fn solve(&self, &n: &usize) -> usize {
        let primes: Vec<usize> = Sieve::new(n).primes().collect();
        // window primes[lo..hi] with running sum
        let (mut hi, mut sum, mut ways) = (0usize, 0usize, 0usize);
        for lo in 0..primes.len() {
            while hi < primes.len() && sum < n {
                sum += primes[hi];
                hi += 1;
            }
            if sum == n {
                ways += 1;
            }
            sum -= primes[lo];
        }
        ways
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
