//! Difficulty rating as a 15% trimmed mean, rounded half up.

use crate::templates::prelude::*;

pub struct TrimmedMean;

static INFO: TemplateInfo = TemplateInfo {
    id: "18110",
    title: "solved.ac",
    category: Category::Sorting,
    input: &[Field::int("n"), Field::int("opinion").repeat("n")],
    output: &[Field::int("rating")],
    constraints: &[
        "0 <= n <= 300000",
        "1 <= opinion <= 30",
        "round(0.15 n) opinions are dropped from each end; 0 when there are none",
    ],
    samples: &[
        Sample {
            input: "5\n1\n5\n5\n7\n8\n",
            output: "6\n",
        },
        Sample {
            input: "10\n1\n13\n12\n15\n3\n16\n13\n12\n14\n15\n",
            output: "13\n",
        },
        Sample {
            input: "0\n",
            output: "0\n",
        },
    ],
};

/// `round(num / den)` with halves going up.
fn round_div(num: u64, den: u64) -> u64 {
    (2 * num + den) / (2 * den)
}

impl Template for TrimmedMean {
    type Input = Vec<u64>;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u64>, InputError> {
        let n = sc.next_in("n", 0..=300_000usize)?;
        sc.values_in("opinion", n, 1..=30)
    }

    fn solve(&self, opinions: &Vec<u64>) -> u64 {
        let n = opinions.len();
        let cut = round_div(15 * n as u64, 100) as usize;
        let mut sorted = opinions.clone();
        sorted.sort_unstable();
        let kept = &sorted[cut..n - cut];
        if kept.is_empty() {
            return 0;
        }
        round_div(kept.iter().sum(), kept.len() as u64)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::round_div;

    #[test]
    fn halves_round_up() {
        assert_eq!(round_div(15, 10), 2);
        assert_eq!(round_div(14, 10), 1);
        assert_eq!(round_div(45, 100), 0);
        assert_eq!(round_div(75, 100), 1);
    }
}
