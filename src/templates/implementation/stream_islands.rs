//! Islands in a twelve-value data stream: maximal runs whose values all
//! exceed the values bordering the run.

use std::collections::BTreeSet;

use crate::templates::prelude::*;

pub struct StreamIslands;

static INFO: TemplateInfo = TemplateInfo {
    id: "10432",
    title: "Islands in a data stream",
    category: Category::Implementation,
    input: &[
        Field::int("p"),
        Field::int("case").repeat("p"),
        Field::int("value").repeat("12 * p"),
    ],
    output: &[Field::int("case_islands").repeat("p")],
    constraints: &["1 <= p <= 1000", "0 <= value <= 1000"],
    samples: &[Sample {
        input: "4\n1 0 0 1 1 2 2 1 1 0 1 2 0\n2 0 1 2 1 1 2 1 1 1 1 0 0\n3 0 1 2 1 1 2 1 0 1 1 0 0\n4 0 1 2 3 4 5 4 3 2 1 0 0\n",
        output: "1 4\n2 3\n3 4\n4 5\n",
    }],
};

const LEN: usize = 12;

/// Every island has a distinct (minimum, start) pair: for each level count
/// the runs at or above it that touch the level.
fn islands(stream: &[u32; LEN]) -> usize {
    let levels: BTreeSet<u32> = stream.iter().copied().filter(|&v| v > 0).collect();
    let mut count = 0;
    for &level in &levels {
        let mut counted = false;
        for &v in stream {
            if v < level {
                counted = false;
            } else if v == level && !counted {
                count += 1;
                counted = true;
            }
        }
    }
    count
}

impl Template for StreamIslands {
    type Input = Vec<(u32, [u32; LEN])>;
    type Output = Vec<(u32, usize)>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Self::Input, InputError> {
        let p = sc.next_in("p", 1..=1000usize)?;
        (0..p)
            .map(|_| {
                let case: u32 = sc.next("case")?;
                let mut stream = [0; LEN];
                for v in &mut stream {
                    *v = sc.next_in("value", 0..=1000)?;
                }
                Ok((case, stream))
            })
            .collect()
    }

    fn solve(&self, cases: &Self::Input) -> Vec<(u32, usize)> {
        cases.iter().map(|(case, s)| (*case, islands(s))).collect()
    }

    fn render(&self, output: &Vec<(u32, usize)>, out: &mut String) {
        for (case, n) in output {
            push_line(out, [case.to_string(), n.to_string()]);
        }
    }
}
