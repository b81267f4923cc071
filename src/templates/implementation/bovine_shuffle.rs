//! Initial cow order recovered from the order after three shuffles.

use crate::templates::prelude::*;

pub struct BovineShuffle;

static INFO: TemplateInfo = TemplateInfo {
    id: "15464",
    title: "The bovine shuffle",
    category: Category::Implementation,
    input: &[
        Field::int("n"),
        Field::int("move").repeat("n"),
        Field::int("id").repeat("n"),
    ],
    output: &[Field::int("initial").repeat("n")],
    constraints: &["1 <= n <= 100", "move is a permutation of 1..=n", "ids are 7-digit numbers"],
    samples: &[Sample {
        input: "5\n1 3 4 5 2\n1234567 2222222 3333333 4444444 5555555\n",
        output: "1234567\n5555555\n2222222\n3333333\n4444444\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    /// Cow in position `i` moves to `moves[i]` (0-based).
    pub moves: Vec<usize>,
    pub ids: Vec<u32>,
}

const SHUFFLES: usize = 3;

impl Template for BovineShuffle {
    type Input = Input;
    type Output = Vec<u32>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        let moves: Vec<usize> = sc.values_in("move", n, 1..=n)?.into_iter().map(|m| m - 1).collect();
        let mut hit = vec![false; n];
        for &m in &moves {
            if std::mem::replace(&mut hit[m], true) {
                return Err(InputError::constraint("move", "expected a permutation"));
            }
        }
        let ids = sc.values_in("id", n, 1_000_000..=9_999_999)?;
        Ok(Input { moves, ids })
    }

    fn solve(&self, input: &Input) -> Vec<u32> {
        (0..input.moves.len())
            .map(|i| {
                let end = (0..SHUFFLES).fold(i, |p, _| input.moves[p]);
                input.ids[end]
            })
            .collect()
    }

    fn render(&self, output: &Vec<u32>, out: &mut String) {
        for id in output {
            push_line(out, [id]);
        }
    }
}
