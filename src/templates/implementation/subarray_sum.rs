//! Contiguous runs of positive numbers summing to exactly `m`, counted with
//! two pointers.

use crate::templates::prelude::*;

pub struct SubarraySum;

static INFO: TemplateInfo = TemplateInfo {
    id: "2003",
    title: "Sum of numbers 2",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("m"), Field::int("a").repeat("n")],
    output: &[Field::int("count")],
    constraints: &["1 <= n <= 10000", "1 <= m <= 300000000", "1 <= a <= 30000"],
    samples: &[
        Sample {
            input: "4 2\n1 1 1 1\n",
            output: "3\n",
        },
        Sample {
            input: "10 5\n1 2 3 4 2 5 3 1 1 2\n",
            output: "3\n",
        },
    ],
};

/// Windows of `a` summing to `m`; every value must be positive.
fn count_windows(a: &[u64], m: u64) -> usize {
    let (mut hi, mut sum, mut count) = (0, 0, 0);
    for lo in 0..a.len() {
        while hi < a.len() && sum < m {
            sum += a[hi];
            hi += 1;
        }
        if sum == m {
            count += 1;
        }
        sum -= a[lo];
    }
    count
}

impl Template for SubarraySum {
    type Input = (Vec<u64>, u64);
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(Vec<u64>, u64), InputError> {
        let n = sc.next_in("n", 1..=10_000usize)?;
        let m = sc.next_in("m", 1..=300_000_000)?;
        Ok((sc.values_in("a", n, 1..=30_000)?, m))
    }

    fn solve(&self, (a, m): &(Vec<u64>, u64)) -> usize {
        count_windows(a, *m)
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::count_windows;

    #[test]
    fn matches_quadratic_count() {
        let a = [3, 1, 2, 2, 1, 3, 1, 1, 4];
        for m in 1..=20 {
            let brute = (0..a.len())
                .flat_map(|i| (i + 1..=a.len()).map(move |j| (i, j)))
                .filter(|&(i, j)| a[i..j].iter().sum::<u64>() == m)
                .count();
            assert_eq!(count_windows(&a, m), brute, "m = {m}");
        }
    }
}
