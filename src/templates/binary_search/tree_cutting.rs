//! Highest saw setting that still yields at least `m` metres of wood.

use crate::templates::prelude::*;

pub struct TreeCutting;

static INFO: TemplateInfo = TemplateInfo {
    id: "2805",
    title: "Tree cutting",
    category: Category::BinarySearch,
    input: &[Field::int("n"), Field::int("m"), Field::int("height").repeat("n")],
    output: &[Field::int("saw_height")],
    constraints: &[
        "1 <= n <= 1000000",
        "1 <= m <= 2000000000",
        "0 <= height <= 1000000000",
    ],
    samples: &[
        Sample {
            input: "4 7\n20 15 10 17\n",
            output: "15\n",
        },
        Sample {
            input: "5 20\n4 42 40 26 46\n",
            output: "36\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub wanted: u64,
    pub heights: Vec<u64>,
}

fn wood_at(heights: &[u64], saw: u64) -> u64 {
    heights.iter().map(|&h| h.saturating_sub(saw)).sum()
}

impl Template for TreeCutting {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1_000_000usize)?;
        let wanted = sc.next_in("m", 1..=2_000_000_000u64)?;
        let heights = sc.values_in("height", n, 0..=1_000_000_000u64)?;
        Ok(Input { wanted, heights })
    }

    fn solve(&self, input: &Input) -> u64 {
        let mut lo = 0u64;
        let mut hi = input.heights.iter().copied().max().unwrap_or(0);
        let mut best = 0;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            if wood_at(&input.heights, mid) >= input.wanted {
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
