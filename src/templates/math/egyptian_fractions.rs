//! Write `m / n` as a sum of unit fractions whose denominators stay
//! below one million.
//!
//! Depth-first search over the next denominator, smallest first. A branch is
//! taken only while the remainder's reduced denominator stays under the
//! bound; a dead end backs up to the previous choice and tries the next
//! larger denominator.

use crate::templates::prelude::*;
use crate::utils::gcd;

pub struct EgyptianFractions;

static INFO: TemplateInfo = TemplateInfo {
    id: "4587",
    title: "Egyptian fractions",
    category: Category::Math,
    input: &[Field::int("fraction").until("0 0")],
    output: &[Field::line("denominators").until_end()],
    constraints: &["each fraction is `m n` with 1 <= m < n < 100", "input ends with `0 0`"],
    samples: &[Sample {
        input: "3 4\n2 7\n5 98\n0 0\n",
        output: "2 4\n4 28\n20 980\n",
    }],
};

const BOUND: u64 = 1_000_000;

/// Greedy-first search from the remainder `m / n`; `chosen` holds the
/// denominators picked so far.
fn expand(m: u64, n: u64, chosen: &mut Vec<u64>) -> bool {
    let mut k = n.div_ceil(m);
    while k < BOUND {
        let num = m * k - n;
        let den = n * k;
        chosen.push(k);
        if num == 0 {
            return true;
        }
        let g = gcd(num, den);
        if den / g < BOUND && expand(num / g, den / g, chosen) {
            return true;
        }
        chosen.pop();
        k += 1;
    }
    false
}

impl Template for EgyptianFractions {
    type Input = Vec<(u64, u64)>;
    type Output = Vec<Vec<u64>>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<(u64, u64)>, InputError> {
        let mut fractions = Vec::new();
        loop {
            let m = sc.next_in("fraction", 0..=98u64)?;
            let n = sc.next_in("fraction", 0..=99u64)?;
            if m == 0 && n == 0 {
                return Ok(fractions);
            }
            if m == 0 || m >= n {
                return Err(InputError::constraint("fraction", format!("{m}/{n} is not a proper fraction")));
            }
            fractions.push((m, n));
        }
    }

    fn solve(&self, fractions: &Vec<(u64, u64)>) -> Vec<Vec<u64>> {
        fractions
            .iter()
            .map(|&(m, n)| {
                let mut chosen = Vec::new();
                expand(m, n, &mut chosen);
                chosen
            })
            .collect()
    }

    fn render(&self, output: &Vec<Vec<u64>>, out: &mut String) {
        for denominators in output {
            push_line(out, denominators);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_fractions_sum_back() {
        for n in 2..40u64 {
            for m in 1..n {
                let mut chosen = Vec::new();
                assert!(expand(m, n, &mut chosen), "{m}/{n}");
                let (p, q) = chosen.iter().fold((0u64, 1u64), |(p, q), &k| {
                    let (p, q) = (p * k + q, q * k);
                    let g = gcd(p, q);
                    (p / g, q / g)
                });
                assert_eq!(p * n, m * q);
                assert!(chosen.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
