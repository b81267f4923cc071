//! Largest per-request cap that keeps the total within budget.

use crate::templates::prelude::*;

pub struct BudgetCap;

static INFO: TemplateInfo = TemplateInfo {
    id: "2512",
    title: "Budget",
    category: Category::BinarySearch,
    input: &[
        Field::int("n"),
        Field::int("request").repeat("n"),
        Field::int("budget"),
    ],
    output: &[Field::int("cap")],
    constraints: &[
        "3 <= n <= 10000",
        "1 <= request <= 100000",
        "n <= budget <= 1000000000",
    ],
    samples: &[
        Sample {
            input: "4\n120 110 140 150\n485\n",
            output: "127\n",
        },
        Sample {
            input: "5\n70 80 30 40 100\n450\n",
            output: "100\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub requests: Vec<u64>,
    pub budget: u64,
}

impl Template for BudgetCap {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 3..=10_000usize)?;
        let requests = sc.values_in("request", n, 1..=100_000u64)?;
        let budget = sc.next_in("budget", n as u64..=1_000_000_000)?;
        Ok(Input { requests, budget })
    }

    fn solve(&self, input: &Input) -> u64 {
        let spent = |cap: u64| -> u64 { input.requests.iter().map(|&r| r.min(cap)).sum() };
        let (mut lo, mut hi) = (0u64, input.requests.iter().copied().max().unwrap_or(0));
        let mut best = 0;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            if spent(mid) <= input.budget {
                best = mid;
                lo = mid + 1;
            } else if mid == 0 {
                break;
            } else {
                hi = mid - 1;
            }
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
    fn everything_fits() {
        let input = Input {
            requests: vec![10, 20, 30],
            budget: 1000,
        };
        assert_eq!(BudgetCap.solve(&input), 30);
    }
}
