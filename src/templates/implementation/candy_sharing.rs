//! Ways to hand out candy so the first `i` children hold kinds `1..=i`,
//! summed over every prefix length.

use std::collections::BTreeMap;

use crate::templates::prelude::*;

pub struct CandySharing;

static INFO: TemplateInfo = TemplateInfo {
    id: "12910",
    title: "Sharing candy",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("candy").repeat("n")],
    output: &[Field::int("ways")],
    constraints: &["1 <= n <= 50", "1 <= candy <= 50"],
    samples: &[
        Sample {
            input: "6\n1 2 2 3 3 4\n",
            output: "11\n",
        },
        Sample {
            input: "3\n2 3 4\n",
            output: "0\n",
        },
    ],
};

impl Template for CandySharing {
    type Input = Vec<u32>;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u32>, InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        sc.values_in("candy", n, 1..=50)
    }

    fn solve(&self, candy: &Vec<u32>) -> u64 {
        let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
        for &c in candy {
            *counts.entry(c).or_default() += 1;
        }
        let mut total = 0;
        let mut ways = 1;
        for kind in 1.. {
            match counts.get(&kind) {
                Some(&c) => {
                    ways *= c;
                    total += ways;
                }
                None => break,
            }
        }
        total
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
