//! Best trading profit when each day you may buy one share, sell any number,
//! or do nothing: sell everything at each future maximum.

use crate::templates::prelude::*;

pub struct StockProfit;

static INFO: TemplateInfo = TemplateInfo {
    id: "11501",
    title: "Stocks",
    category: Category::Greedy,
    input: &[
        Field::int("t"),
        Field::int("n").repeat("t"),
        Field::int("price").repeat("n"),
    ],
    output: &[Field::int("profit").repeat("t")],
    constraints: &["1 <= t", "1 <= n <= 1000000", "1 <= price <= 10000"],
    samples: &[Sample {
        input: "3\n3\n10 7 6\n3\n3 5 9\n5\n1 1 3 1 2\n",
        output: "0\n10\n5\n",
    }],
};

impl Template for StockProfit {
    type Input = Vec<Vec<u64>>;
    type Output = Vec<u64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<u64>>, InputError> {
        let t = sc.next_in("t", 1..=1_000_000usize)?;
        (0..t)
            .map(|_| {
                let n = sc.next_in("n", 1..=1_000_000usize)?;
                sc.values_in("price", n, 1..=10_000)
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<Vec<u64>>) -> Vec<u64> {
        cases
            .iter()
            .map(|prices| {
                let mut best_later = 0;
                let mut profit = 0;
                for &p in prices.iter().rev() {
                    best_later = best_later.max(p);
                    profit += best_later - p;
                }
                profit
            })
            .collect()
    }

    fn render(&self, output: &Vec<u64>, out: &mut String) {
        for p in output {
            push_line(out, [p]);
        }
    }
}
