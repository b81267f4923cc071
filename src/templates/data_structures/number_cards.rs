//! Set membership with an ordered set.

use std::collections::BTreeSet;

use crate::templates::prelude::*;

pub struct NumberCards;

static INFO: TemplateInfo = TemplateInfo {
    id: "10815",
    title: "Number cards",
    category: Category::DataStructures,
    input: &[
        Field::int("n"),
        Field::int("card").repeat("n"),
        Field::int("m"),
        Field::int("query").repeat("m"),
    ],
    output: &[Field::int("owned").repeat("m")],
    constraints: &["1 <= n, m <= 500000", "-10000000 <= card, query <= 10000000"],
    samples: &[Sample {
        input: "5\n6 3 2 10 -10\n8\n10 9 -5 2 3 4 5 -10\n",
        output: "1 0 0 1 1 0 0 1\n",
    }],
};

const VALUE: std::ops::RangeInclusive<i32> = -10_000_000..=10_000_000;

#[derive(Debug, Clone)]
pub struct Input {
    pub cards: Vec<i32>,
    pub queries: Vec<i32>,
}

impl Template for NumberCards {
    type Input = Input;
    type Output = Vec<u8>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=500_000usize)?;
        let cards = sc.values_in("card", n, VALUE)?;
        let m = sc.next_in("m", 1..=500_000usize)?;
        let queries = sc.values_in("query", m, VALUE)?;
        Ok(Input { cards, queries })
    }

    fn solve(&self, input: &Input) -> Vec<u8> {
        let owned: BTreeSet<i32> = input.cards.iter().copied().collect();
        input
            .queries
            .iter()
            .map(|q| u8::from(owned.contains(q)))
            .collect()
    }

    fn render(&self, output: &Vec<u8>, out: &mut String) {
        push_line(out, output);
    }
}
