//! Smallest number `>= n` that is both prime and a palindrome.

use crate::sieve::Sieve;
use crate::templates::prelude::*;
use crate::utils::is_palindrome;

pub struct PrimePalindrome;

static INFO: TemplateInfo = TemplateInfo {
    id: "1747",
    title: "Prime & palindrome",
    category: Category::Eratosthenes,
    input: &[Field::int("n")],
    output: &[Field::int("answer")],
    constraints: &["1 <= n <= 1000000"],
    samples: &[
        Sample {
            input: "31\n",
            output: "101\n",
        },
        Sample {
            input: "1\n",
            output: "2\n",
        },
    ],
};

/// Smallest prime palindrome above every admissible `n`.
const BOUND: usize = 1_003_001;

impl Template for PrimePalindrome {
    type Input = usize;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<usize, InputError> {
        sc.next_in("n", 1..=1_000_000usize)
    }

    fn solve(&self, &n: &usize) -> usize {
        let sieve = Sieve::new(BOUND);
        (n..=BOUND)
            .find(|&k| sieve.is_prime(k) && is_palindrome(k as u64))
            .unwrap_or(BOUND)
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_end_of_domain() {
        assert_eq!(PrimePalindrome.solve(&1_000_000), 1_003_001);
        assert_eq!(PrimePalindrome.solve(&11), 11);
    }
}
