//! Votes candidate 1 must buy to strictly lead every rival, always buying
//! from the current front-runner.

use std::collections::BinaryHeap;

use crate::templates::prelude::*;

pub struct Election;

static INFO: TemplateInfo = TemplateInfo {
    id: "1417",
    title: "National assembly election",
    category: Category::Greedy,
    input: &[Field::int("n"), Field::int("votes").repeat("n")],
    output: &[Field::int("bought")],
    constraints: &["1 <= n <= 50", "1 <= votes <= 100", "the first votes value is candidate 1"],
    samples: &[
        Sample {
            input: "3\n5\n7\n7\n",
            output: "2\n",
        },
        Sample {
            input: "4\n10\n10\n10\n10\n",
            output: "1\n",
        },
        Sample {
            input: "1\n1\n",
            output: "0\n",
        },
        Sample {
            input: "5\n5\n10\n7\n3\n8\n",
            output: "4\n",
        },
    ],
};

impl Template for Election {
    type Input = Vec<u32>;
    type Output = u32;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u32>, InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        sc.values_in("votes", n, 1..=100)
    }

    fn solve(&self, votes: &Vec<u32>) -> u32 {
        let Some((&mine, rivals)) = votes.split_first() else {
            return 0;
        };
        let mut rivals: BinaryHeap<u32> = rivals.iter().copied().collect();
        let mut have = mine;
        while let Some(mut top) = rivals.peek_mut() {
            if *top < have {
                break;
            }
            *top -= 1;
            have += 1;
        }
        have - mine
    }

    fn render(&self, output: &u32, out: &mut String) {
        push_line(out, [output]);
    }
}
