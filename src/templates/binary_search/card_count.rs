//! Occurrence counts of query values, found by binary search on a sorted copy.

use crate::templates::prelude::*;

pub struct CardCount;

static INFO: TemplateInfo = TemplateInfo {
    id: "10816",
    title: "Number cards 2",
    category: Category::BinarySearch,
    input: &[
        Field::int("n"),
        Field::int("card").repeat("n"),
        Field::int("m"),
        Field::int("query").repeat("m"),
    ],
    output: &[Field::int("count").repeat("m")],
    constraints: &["1 <= n, m <= 500000", "-10000000 <= card, query <= 10000000"],
    samples: &[
        Sample {
            input: "10\n6 3 2 10 10 10 -10 -10 7 3\n8\n10 9 -5 2 3 4 5 -10\n",
            output: "3 0 0 1 2 0 0 2\n",
        },
        Sample {
            input: "5\n3 5 3 2 5\n3\n5 3 7\n",
            output: "2 2 0\n",
        },
    ],
};

const VALUE: std::ops::RangeInclusive<i32> = -10_000_000..=10_000_000;

#[derive(Debug, Clone)]
pub struct Input {
    pub cards: Vec<i32>,
    pub queries: Vec<i32>,
}

impl Template for CardCount {
    type Input = Input;
    type Output = Vec<usize>;

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

    fn solve(&self, input: &Input) -> Vec<usize> {
        let mut sorted = input.cards.clone();
        sorted.sort_unstable();
        input
            .queries
            .iter()
            .map(|&q| {
                let lo = sorted.partition_point(|&c| c < q);
                let hi = sorted.partition_point(|&c| c <= q);
                hi - lo
            })
            .collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        push_line(out, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_counts_zero() {
        let input = Input {
            cards: vec![1, 1, 1],
            queries: vec![1, 0, 2],
        };
        assert_eq!(CardCount.solve(&input), vec![3, 0, 0]);
    }
}
