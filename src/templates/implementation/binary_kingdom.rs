//! Dirty road segments as roads get dirtied one by one; each count query
//! reports the number of maximal dirty runs.

use crate::templates::prelude::*;

pub struct BinaryKingdom;

static INFO: TemplateInfo = TemplateInfo {
    id: "16567",
    title: "Binary kingdom",
    category: Category::Implementation,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("road").repeat("n"),
        Field::int("query").repeat("m"),
    ],
    output: &[Field::int("runs").until_end()],
    constraints: &[
        "1 <= n, m <= 1000000",
        "road is 0 clean or 1 dirty",
        "query is `0` (count runs) or `1 i` (dirty road i, 1 <= i <= n)",
    ],
    samples: &[
        Sample {
            input: "5 4\n1 0 0 1 0\n0\n1 2\n0\n1 5\n",
            output: "2\n2\n",
        },
        Sample {
            input: "4 5\n0 0 0 0\n0\n1 2\n1 3\n0\n1 1\n",
            output: "0\n1\n",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Count,
    Dirty(usize),
}

#[derive(Debug, Clone)]
pub struct Input {
    pub dirty: Vec<bool>,
    pub queries: Vec<Query>,
}

impl Template for BinaryKingdom {
    type Input = Input;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1_000_000usize)?;
        let m = sc.next_in("m", 1..=1_000_000usize)?;
        let dirty = (0..n)
            .map(|_| sc.next_in("road", 0..=1u8).map(|r| r == 1))
            .collect::<Result<_, _>>()?;
        let queries = (0..m)
            .map(|_| match sc.next_in("query", 0..=1u8)? {
                0 => Ok(Query::Count),
                _ => Ok(Query::Dirty(sc.next_in("query", 1..=n)? - 1)),
            })
            .collect::<Result<_, InputError>>()?;
        Ok(Input { dirty, queries })
    }

    fn solve(&self, input: &Input) -> Vec<usize> {
        let mut dirty = input.dirty.clone();
        let n = dirty.len();
        let mut runs = (0..n).filter(|&i| dirty[i] && (i == 0 || !dirty[i - 1])).count();
        let mut answers = Vec::new();
        for q in &input.queries {
            match *q {
                Query::Count => answers.push(runs),
                Query::Dirty(i) if !dirty[i] => {
                    dirty[i] = true;
                    let left = i > 0 && dirty[i - 1];
                    let right = i + 1 < n && dirty[i + 1];
                    match (left, right) {
                        (false, false) => runs += 1,
                        (true, true) => runs -= 1,
                        _ => {}
                    }
                }
                Query::Dirty(_) => {}
            }
        }
        answers
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for r in output {
            push_line(out, [r]);
        }
    }
}
