//! Find `A + B` by asking an oracle yes/no membership questions.
//!
//! The oracle hides `A` and `B`. The guesser probes candidate values for `A`
//! in a random order without repeats, then does the same for `B`, and
//! reports the sum once both are confirmed. The instance supplies the hidden
//! pair and the seed of the guesser's random source, so a run is
//! reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::templates::prelude::*;

pub struct SumGuessing;

static INFO: TemplateInfo = TemplateInfo {
    id: "30924",
    title: "A + B - 10 (part 2)",
    category: Category::Implementation,
    input: &[Field::int("a"), Field::int("b"), Field::int("seed")],
    output: &[Field::line("answer")],
    constraints: &["1 <= a, b <= 10000", "0 <= seed < 2^64"],
    samples: &[
        Sample {
            input: "3 5 42\n",
            output: "! 8\n",
        },
        Sample {
            input: "10000 1 7\n",
            output: "! 10001\n",
        },
    ],
};

const MAX_VALUE: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    pub a: u32,
    pub b: u32,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    A(u32),
    B(u32),
}

/// Answers questions about the hidden pair.
struct Oracle {
    a: u32,
    b: u32,
    asked: usize,
}

impl Oracle {
    fn ask(&mut self, q: Question) -> bool {
        self.asked += 1;
        match q {
            Question::A(v) => v == self.a,
            Question::B(v) => v == self.b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub sum: Option<u32>,
    pub questions: usize,
}

impl Template for SumGuessing {
    type Input = Input;
    type Output = Outcome;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        Ok(Input {
            a: sc.next_in("a", 1..=MAX_VALUE)?,
            b: sc.next_in("b", 1..=MAX_VALUE)?,
            seed: sc.next("seed")?,
        })
    }

    fn solve(&self, input: &Input) -> Outcome {
        let mut rng = StdRng::seed_from_u64(input.seed);
        let mut oracle = Oracle {
            a: input.a,
            b: input.b,
            asked: 0,
        };
        let mut candidates: Vec<u32> = (1..=MAX_VALUE).collect();

        candidates.shuffle(&mut rng);
        let a = candidates.iter().copied().find(|&v| oracle.ask(Question::A(v)));
        candidates.shuffle(&mut rng);
        let b = candidates.iter().copied().find(|&v| oracle.ask(Question::B(v)));

        Outcome {
            sum: a.zip(b).map(|(a, b)| a + b),
            questions: oracle.asked,
        }
    }

    fn render(&self, output: &Outcome, out: &mut String) {
        if let Some(sum) = output.sum {
            push_line(out, ["!".to_string(), sum.to_string()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_asks_the_same_questions() {
        let input = Input { a: 1234, b: 77, seed: 9 };
        let first = SumGuessing.solve(&input);
        assert_eq!(first, SumGuessing.solve(&input));
        assert_eq!(first.sum, Some(1311));
        assert!(first.questions >= 2 && first.questions <= 2 * MAX_VALUE as usize);
    }
}
