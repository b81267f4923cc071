//! Distinct integers formed by concatenating `k` of `n` cards in order.

use std::collections::HashSet;

use crate::templates::prelude::*;

pub struct CardArrangement;

static INFO: TemplateInfo = TemplateInfo {
    id: "5568",
    title: "Placing cards",
    category: Category::Bruteforcing,
    input: &[Field::int("n"), Field::int("k"), Field::int("card").repeat("n")],
    output: &[Field::int("distinct")],
    constraints: &["4 <= n <= 10", "2 <= k <= 4", "1 <= card <= 99"],
    samples: &[
        Sample {
            input: "4\n2\n1\n2\n12\n1\n",
            output: "7\n",
        },
        Sample {
            input: "6\n3\n72\n2\n12\n7\n2\n1\n",
            output: "68\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub k: usize,
    pub cards: Vec<String>,
}

fn arrange(
    cards: &[String],
    k: usize,
    used: &mut [bool],
    prefix: &mut String,
    seen: &mut HashSet<String>,
) {
    if k == 0 {
        seen.insert(prefix.clone());
        return;
    }
    for i in 0..cards.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let len = prefix.len();
        prefix.push_str(&cards[i]);
        arrange(cards, k - 1, used, prefix, seen);
        prefix.truncate(len);
        used[i] = false;
    }
}

impl Template for CardArrangement {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 4..=10usize)?;
        let k = sc.next_in("k", 2..=4usize)?;
        let cards = (0..n)
            .map(|_| sc.next_in("card", 1..=99u32).map(|c| c.to_string()))
            .collect::<Result<_, _>>()?;
        Ok(Input { k, cards })
    }

    fn solve(&self, input: &Input) -> usize {
        // cards have no leading zeros, so equal strings mean equal integers
        let mut seen = HashSet::new();
        let mut used = vec![false; input.cards.len()];
        arrange(&input.cards, input.k, &mut used, &mut String::new(), &mut seen);
        seen.len()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
