//! Fewest 3 kg and 5 kg bags adding up to exactly `n` kg.

use crate::templates::prelude::*;

pub struct SugarDelivery;

static INFO: TemplateInfo = TemplateInfo {
    id: "2839",
    title: "Sugar delivery",
    category: Category::Greedy,
    input: &[Field::int("n")],
    output: &[Field::int("bags")],
    constraints: &["3 <= n <= 5000", "-1 when n cannot be made exactly"],
    samples: &[
        Sample {
            input: "18\n",
            output: "4\n",
        },
        Sample {
            input: "4\n",
            output: "-1\n",
        },
        Sample {
            input: "6\n",
            output: "2\n",
        },
        Sample {
            input: "11\n",
            output: "3\n",
        },
    ],
};

impl Template for SugarDelivery {
    type Input = u32;
    type Output = Option<u32>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<u32, InputError> {
        sc.next_in("n", 3..=5000)
    }

    fn solve(&self, &n: &u32) -> Option<u32> {
        // as many 5 kg bags as still leave a multiple of 3
        (0..=n / 5)
            .rev()
            .find(|fives| (n - fives * 5) % 3 == 0)
            .map(|fives| fives + (n - fives * 5) / 3)
    }

    fn render(&self, output: &Option<u32>, out: &mut String) {
        match output {
            Some(b) => push_line(out, [b]),
            None => push_line(out, ["-1"]),
        }
    }
}
