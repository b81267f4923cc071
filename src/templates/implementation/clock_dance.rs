//! Neighbours of dancer `k` after `n` turns of a clock dance, where odd
//! dancers move clockwise and even dancers counter-clockwise.

use crate::templates::prelude::*;

pub struct ClockDance;

static INFO: TemplateInfo = TemplateInfo {
    id: "12035",
    title: "Dance around the clock (small)",
    category: Category::Implementation,
    input: &[
        Field::int("t"),
        Field::int("d").repeat("t"),
        Field::int("k").repeat("t"),
        Field::int("n").repeat("t"),
    ],
    output: &[Field::line("case").repeat("t")],
    constraints: &["1 <= t <= 100", "4 <= d <= 100000000, d even", "1 <= k <= d", "1 <= n <= 100000000"],
    samples: &[
        Sample {
            input: "3\n8 3 1\n8 4 1\n8 3 3\n",
            output: "Case #1: 6 4\nCase #2: 3 1\nCase #3: 2 8\n",
        },
        Sample {
            input: "2\n4 1 4\n6 2 5\n",
            output: "Case #1: 2 4\nCase #2: 5 3\n",
        },
    ],
};

/// `(right, left)` neighbours, positions numbered `1..=d`.
fn neighbours(d: i64, k: i64, n: i64) -> (i64, i64) {
    let n = n % d;
    // odd dancers drift one way, their even neighbours the other
    let shift = if k % 2 == 0 { -n } else { n };
    let pos = k + shift;
    let label = |p: i64| match p.rem_euclid(d) {
        0 => d,
        v => v,
    };
    (label(pos + shift + 1), label(pos + shift - 1))
}

impl Template for ClockDance {
    type Input = Vec<(i64, i64, i64)>;
    type Output = Vec<(i64, i64)>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Self::Input, InputError> {
        let t = sc.next_in("t", 1..=100usize)?;
        (0..t)
            .map(|_| {
                let d = sc.next_in("d", 4..=100_000_000i64)?;
                if d % 2 != 0 {
                    return Err(InputError::constraint("d", "the number of dancers must be even"));
                }
                let k = sc.next_in("k", 1..=d)?;
                let n = sc.next_in("n", 1..=100_000_000)?;
                Ok((d, k, n))
            })
            .collect()
    }

    fn solve(&self, cases: &Self::Input) -> Vec<(i64, i64)> {
        cases.iter().map(|&(d, k, n)| neighbours(d, k, n)).collect()
    }

    fn render(&self, output: &Vec<(i64, i64)>, out: &mut String) {
        for (i, (right, left)) in output.iter().enumerate() {
            push_line(out, [format!("Case #{}:", i + 1), right.to_string(), left.to_string()]);
        }
    }
}
