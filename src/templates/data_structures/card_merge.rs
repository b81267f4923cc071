//! Repeatedly merge the two smallest cards and report the final total.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::templates::prelude::*;

pub struct CardMerge;

static INFO: TemplateInfo = TemplateInfo {
    id: "15903",
    title: "Card merging game",
    category: Category::DataStructures,
    input: &[Field::int("n"), Field::int("m"), Field::int("card").repeat("n")],
    output: &[Field::int("total")],
    constraints: &["2 <= n <= 1000", "0 <= m <= 15n", "1 <= card <= 1000000"],
    samples: &[
        Sample {
            input: "3 1\n3 2 6\n",
            output: "16\n",
        },
        Sample {
            input: "4 2\n4 2 3 1\n",
            output: "19\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub merges: usize,
    pub cards: Vec<u64>,
}

impl Template for CardMerge {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 2..=1000usize)?;
        let merges = sc.next_in("m", 0..=15 * n)?;
        let cards = sc.values_in("card", n, 1..=1_000_000u64)?;
        Ok(Input { merges, cards })
    }

    fn solve(&self, input: &Input) -> u64 {
        let mut heap: BinaryHeap<Reverse<u64>> = input.cards.iter().map(|&c| Reverse(c)).collect();
        for _ in 0..input.merges {
            let (Some(Reverse(a)), Some(Reverse(b))) = (heap.pop(), heap.pop()) else {
                break;
            };
            heap.push(Reverse(a + b));
            heap.push(Reverse(a + b));
        }
        heap.into_iter().map(|Reverse(c)| c).sum()
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
