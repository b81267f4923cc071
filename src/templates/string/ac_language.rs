//! Run programs of the AC language, where `R` reverses the array and `D`
//! drops its first element, reporting `error` on dropping from an empty one.
//!
//! The array is never reversed in place: a direction flag decides which end
//! `D` drops from and in which order the result is printed.

use std::collections::VecDeque;

use crate::scanner::check_range;
use crate::templates::prelude::*;

pub struct AcLanguage;

static INFO: TemplateInfo = TemplateInfo {
    id: "5430",
    title: "AC",
    category: Category::String,
    input: &[
        Field::int("t"),
        Field::word("program").repeat("t"),
        Field::int("n").repeat("t"),
        Field::word("array").repeat("t"),
    ],
    output: &[Field::word("result").repeat("t")],
    constraints: &[
        "1 <= t <= 100",
        "program is 1 to 100000 letters over R and D",
        "0 <= n <= 100000, array is `[x1,...,xn]` with 1 <= x <= 100",
    ],
    samples: &[Sample {
        input: "4\nRDD\n4\n[1,2,3,4]\nDD\n1\n[42]\nRRD\n6\n[1,1,2,3,5,8]\nD\n0\n[]\n",
        output: "[2,1]\nerror\n[1,2,3,5,8]\nerror\n",
    }],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Reverse,
    Drop,
}

#[derive(Debug, Clone)]
pub struct Case {
    pub program: Vec<Op>,
    pub array: Vec<u32>,
}

fn parse_array(sc: &mut Scanner<'_>, n: usize) -> Result<Vec<u32>, InputError> {
    let token = sc.token("array")?;
    let inner = token
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| InputError::constraint("array", "expected `[...]`"))?;
    let values: Vec<u32> = if inner.is_empty() {
        Vec::new()
    } else {
        inner
            .split(',')
            .map(|v| {
                let x = v.parse().map_err(|_| InputError::Invalid {
                    field: "array",
                    token: v.to_string(),
                })?;
                check_range("array", x, &(1..=100))
            })
            .collect::<Result<_, _>>()?
    };
    if values.len() != n {
        return Err(InputError::constraint("array", format!("expected {n} values, got {}", values.len())));
    }
    Ok(values)
}

fn run(case: &Case) -> Option<Vec<u32>> {
    let mut deque: VecDeque<u32> = case.array.iter().copied().collect();
    let mut forward = true;
    for op in &case.program {
        match op {
            Op::Reverse => forward = !forward,
            Op::Drop if forward => {
                deque.pop_front()?;
            }
            Op::Drop => {
                deque.pop_back()?;
            }
        }
    }
    Some(if forward {
        deque.into_iter().collect()
    } else {
        deque.into_iter().rev().collect()
    })
}

impl Template for AcLanguage {
    type Input = Vec<Case>;
    type Output = Vec<Option<Vec<u32>>>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Case>, InputError> {
        let t = sc.next_in("t", 1..=100usize)?;
        (0..t)
            .map(|_| {
                let program = sc
                    .word_of("program", |b| b == b'R' || b == b'D')?
                    .bytes()
                    .map(|b| if b == b'R' { Op::Reverse } else { Op::Drop })
                    .collect::<Vec<_>>();
                if program.len() > 100_000 {
                    return Err(InputError::constraint("program", "longer than 100000 operations"));
                }
                let n = sc.next_in("n", 0..=100_000usize)?;
                let array = parse_array(sc, n)?;
                Ok(Case { program, array })
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<Case>) -> Vec<Option<Vec<u32>>> {
        cases.iter().map(run).collect()
    }

    fn render(&self, output: &Vec<Option<Vec<u32>>>, out: &mut String) {
        for result in output {
            match result {
                Some(values) => {
                    let body: Vec<String> = values.iter().map(u32::to_string).collect();
                    push_line(out, [format!("[{}]", body.join(","))]);
                }
                None => push_line(out, ["error"]),
            }
        }
    }
}
