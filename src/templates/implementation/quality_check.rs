//! Infer which parts are good, bad or undetermined from machine test runs.
//!
//! A passing run proves all three parts good. A failing run with two proven
//! good parts proves the third bad.

use crate::templates::prelude::*;

pub struct QualityCheck;

static INFO: TemplateInfo = TemplateInfo {
    id: "5600",
    title: "Quality check",
    category: Category::Implementation,
    input: &[
        Field::int("a"),
        Field::int("b"),
        Field::int("c"),
        Field::int("n"),
        Field::int("test").repeat("4 * n"),
    ],
    output: &[Field::int("status").repeat("a + b + c")],
    constraints: &[
        "1 <= a, b, c <= 100",
        "1 <= n <= 1000",
        "test is `i j k r`: a power part 1..=a, a motor a+1..=a+b, a cable a+b+1..=a+b+c, r 1 pass 0 fail",
        "status is 0 bad, 1 good, 2 undetermined",
    ],
    samples: &[Sample {
        input: "2 2 2\n6\n2 4 5 0\n2 3 6 0\n1 4 5 0\n2 3 5 1\n1 4 6 0\n2 4 6 1\n",
        output: "0\n1\n1\n1\n1\n1\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub parts: usize,
    pub tests: Vec<([usize; 3], bool)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Bad = 0,
    Good = 1,
    Unknown = 2,
}

impl Template for QualityCheck {
    type Input = Input;
    type Output = Vec<Status>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let a = sc.next_in("a", 1..=100usize)?;
        let b = sc.next_in("b", 1..=100usize)?;
        let c = sc.next_in("c", 1..=100usize)?;
        let n = sc.next_in("n", 1..=1000usize)?;
        let tests = (0..n)
            .map(|_| {
                let i = sc.next_in("test", 1..=a)?;
                let j = sc.next_in("test", a + 1..=a + b)?;
                let k = sc.next_in("test", a + b + 1..=a + b + c)?;
                let passed = sc.next_in("test", 0..=1u8)? == 1;
                Ok(([i - 1, j - 1, k - 1], passed))
            })
            .collect::<Result<_, InputError>>()?;
        Ok(Input {
            parts: a + b + c,
            tests,
        })
    }

    fn solve(&self, input: &Input) -> Vec<Status> {
        let mut status = vec![Status::Unknown; input.parts];
        for (parts, _) in input.tests.iter().filter(|(_, passed)| *passed) {
            for &p in parts {
                status[p] = Status::Good;
            }
        }
        for (parts, _) in input.tests.iter().filter(|(_, passed)| !*passed) {
            let mut unproven = parts.iter().filter(|&&p| status[p] != Status::Good);
            if let (Some(&p), None) = (unproven.next(), unproven.next()) {
                status[p] = Status::Bad;
            }
        }
        status
    }

    fn render(&self, output: &Vec<Status>, out: &mut String) {
        for &s in output {
            push_line(out, [s as u8]);
        }
    }
}
