//! Fill an answer sheet so that no unknown answer equals its neighbours or
//! the correct answer, keeping the known answers in place.
//!
//! With five choices and at most three excluded values per slot, the first
//! admissible value never leads to a dead end, so a single left-to-right
//! pass produces the lexicographically smallest sheet.

use crate::templates::prelude::*;

pub struct GuessingAnswers;

static INFO: TemplateInfo = TemplateInfo {
    id: "23730",
    title: "Guessing answers",
    category: Category::Bruteforcing,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("answer").repeat("n"),
        Field::int("known").repeat("m"),
    ],
    output: &[Field::int("sheet").repeat("n")],
    constraints: &["1 <= n <= 100000", "0 <= m <= n", "1 <= answer <= 5", "1 <= known <= n"],
    samples: &[
        Sample {
            input: "5 2\n1 2 3 4 5\n2 4\n",
            output: "3 2 1 4 1\n",
        },
        Sample {
            input: "3 0\n1 1 1\n",
            output: "2 3 2\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub answers: Vec<u8>,
    /// Whether the answer at each position is already known.
    pub known: Vec<bool>,
}

impl Template for GuessingAnswers {
    type Input = Input;
    type Output = Vec<u8>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let m = sc.next_in("m", 0..=n)?;
        let answers = sc.values_in("answer", n, 1..=5u8)?;
        let mut known = vec![false; n];
        for _ in 0..m {
            let idx = sc.next_in("known", 1..=n)?;
            known[idx - 1] = true;
        }
        Ok(Input { answers, known })
    }

    fn solve(&self, input: &Input) -> Vec<u8> {
        let n = input.answers.len();
        let mut sheet: Vec<Option<u8>> = (0..n)
            .map(|i| input.known[i].then_some(input.answers[i]))
            .collect();
        for i in 0..n {
            if sheet[i].is_some() {
                continue;
            }
            let prev = i.checked_sub(1).and_then(|p| sheet[p]);
            let next = sheet.get(i + 1).copied().flatten();
            sheet[i] = (1..=5u8)
                .find(|&v| Some(v) != prev && Some(v) != next && v != input.answers[i]);
        }
        sheet.into_iter().map(Option::unwrap_or_default).collect()
    }

    fn render(&self, output: &Vec<u8>, out: &mut String) {
        push_line(out, output);
    }
}
