//! Best total score from problems of five difficulty tiers.
//!
//! A set of at most three problems may weigh at most 10; four or more may
//! weigh at most 15. Tier `i` weighs `i`, so every count is small enough to
//! enumerate directly.

use crate::templates::prelude::*;

pub struct ProblemSetting;

static INFO: TemplateInfo = TemplateInfo {
    id: "26163",
    title: "Setting problems",
    category: Category::Bruteforcing,
    input: &[Field::int("score").repeat("5")],
    output: &[Field::int("best")],
    constraints: &["0 <= score <= 1000000000"],
    samples: &[
        Sample {
            input: "1 2 3 4 5\n",
            output: "15\n",
        },
        Sample {
            input: "10 20 30 40 50\n",
            output: "150\n",
        },
    ],
};

/// Upper bound on how many problems of each tier can ever fit.
const MAX_COUNT: [u64; 5] = [15, 8, 5, 4, 3];

fn allowed(count: u64, weight: u64) -> bool {
    (count <= 3 && weight <= 10) || (count >= 4 && weight <= 15)
}

impl Template for ProblemSetting {
    type Input = [u64; 5];
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<[u64; 5], InputError> {
        let mut scores = [0u64; 5];
        for s in scores.iter_mut() {
            *s = sc.next_in("score", 0..=1_000_000_000u64)?;
        }
        Ok(scores)
    }

    fn solve(&self, scores: &[u64; 5]) -> u64 {
        let mut best = 0;
        let mut counts = [0u64; 5];
        loop {
            let count: u64 = counts.iter().sum();
            let weight: u64 = counts.iter().zip(1..).map(|(c, w)| c * w).sum();
            if allowed(count, weight) {
                let total: u64 = counts.iter().zip(scores).map(|(c, s)| c * s).sum();
                best = best.max(total);
            }
            // odometer over the five counters
            let mut tier = 0;
            while tier < 5 && counts[tier] == MAX_COUNT[tier] {
                counts[tier] = 0;
                tier += 1;
            }
            if tier == 5 {
                break;
            }
            counts[tier] += 1;
        }
        best
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_many_cheap_problems_when_allowed() {
        assert_eq!(ProblemSetting.solve(&[100, 0, 0, 0, 0]), 1500);
    }
}
