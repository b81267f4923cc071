//! Fewest digits whose product is `n`, peeling off the largest single-digit
//! factor each step, or `-1` if `n` has a prime factor above 7.

use crate::templates::prelude::*;

pub struct DigitProduct;

static INFO: TemplateInfo = TemplateInfo {
    id: "2777",
    title: "Number game",
    category: Category::Greedy,
    input: &[Field::int("t"), Field::int("n").repeat("t")],
    output: &[Field::int("digits").repeat("t")],
    constraints: &["1 <= t", "1 <= n <= 1000000000"],
    samples: &[Sample {
        input: "4\n1\n10\n13\n360\n",
        output: "1\n2\n-1\n3\n",
    }],
};

fn digit_count(mut n: u64) -> Option<usize> {
    if n == 1 {
        return Some(1);
    }
    let mut count = 0;
    'peel: while n != 1 {
        for d in (2..=9).rev() {
            if n % d == 0 {
                n /= d;
                count += 1;
                continue 'peel;
            }
        }
        return None;
    }
    Some(count)
}

impl Template for DigitProduct {
    type Input = Vec<u64>;
    type Output = Vec<Option<usize>>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u64>, InputError> {
        let t = sc.next_in("t", 1..=100_000usize)?;
        sc.values_in("n", t, 1..=1_000_000_000)
    }

    fn solve(&self, ns: &Vec<u64>) -> Vec<Option<usize>> {
        ns.iter().map(|&n| digit_count(n)).collect()
    }

    fn render(&self, output: &Vec<Option<usize>>, out: &mut String) {
        for d in output {
            match d {
                Some(d) => push_line(out, [d]),
                None => push_line(out, ["-1"]),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::digit_count;

    #[test]
    fn large_prime_factor() {
        assert_eq!(digit_count(11 * 9), None);
        assert_eq!(digit_count(7 * 7 * 7), Some(3));
        assert_eq!(digit_count(5), Some(1));
    }
}
