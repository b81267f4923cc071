//! Sort a message by how often each value occurs, most frequent first, with
//! ties broken by first appearance.

use std::collections::HashMap;

use crate::templates::prelude::*;

pub struct FrequencySort;

static INFO: TemplateInfo = TemplateInfo {
    id: "2910",
    title: "Frequency sort",
    category: Category::Sorting,
    input: &[Field::int("n"), Field::int("c"), Field::int("value").repeat("n")],
    output: &[Field::int("value").repeat("n")],
    constraints: &["1 <= n <= 1000", "1 <= c <= 1000000000", "1 <= value <= c"],
    samples: &[
        Sample {
            input: "5 2\n2 1 2 1 2\n",
            output: "2 2 2 1 1\n",
        },
        Sample {
            input: "9 77\n11 33 11 77 54 11 25 25 33\n",
            output: "11 11 11 33 33 25 25 77 54\n",
        },
    ],
};

impl Template for FrequencySort {
    type Input = Vec<u32>;
    type Output = Vec<u32>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u32>, InputError> {
        let n = sc.next_in("n", 1..=1000usize)?;
        let c = sc.next_in("c", 1..=1_000_000_000u32)?;
        sc.values_in("value", n, 1..=c)
    }

    fn solve(&self, message: &Vec<u32>) -> Vec<u32> {
        // value -> (count, first position)
        let mut stats: HashMap<u32, (usize, usize)> = HashMap::new();
        for (i, &v) in message.iter().enumerate() {
            stats.entry(v).or_insert((0, i)).0 += 1;
        }
        let mut order: Vec<(u32, (usize, usize))> = stats.into_iter().collect();
        order.sort_unstable_by_key(|&(_, (count, first))| (std::cmp::Reverse(count), first));
        order
            .into_iter()
            .flat_map(|(v, (count, _))| std::iter::repeat(v).take(count))
            .collect()
    }

    fn render(&self, output: &Vec<u32>, out: &mut String) {
        push_line(out, output);
    }
}
