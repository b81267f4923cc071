//! Lexicographically smallest string built by placing each card at either
//! end of a deque, in draw order.

use std::collections::VecDeque;

use crate::templates::prelude::*;

pub struct CardString;

static INFO: TemplateInfo = TemplateInfo {
    id: "13417",
    title: "Card string",
    category: Category::Greedy,
    input: &[
        Field::int("t"),
        Field::int("n").repeat("t"),
        Field::word("card").repeat("n"),
    ],
    output: &[Field::word("string").repeat("t")],
    constraints: &["1 <= t", "1 <= n <= 1000", "card is a single uppercase letter"],
    samples: &[Sample {
        input: "3\n3\nM K U\n5\nA S D F G\n7\nB A C A B A C\n",
        output: "KMU\nASDFG\nAAABCBC\n",
    }],
};

impl Template for CardString {
    type Input = Vec<Vec<u8>>;
    type Output = Vec<String>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<u8>>, InputError> {
        let t = sc.next_in("t", 1..=100_000usize)?;
        (0..t)
            .map(|_| {
                let n = sc.next_in("n", 1..=1000usize)?;
                (0..n)
                    .map(|_| {
                        let card = sc.word_of_len("card", 1)?;
                        match card.as_bytes()[0] {
                            b @ b'A'..=b'Z' => Ok(b),
                            _ => Err(InputError::constraint("card", "expected an uppercase letter")),
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<Vec<u8>>) -> Vec<String> {
        cases
            .iter()
            .map(|cards| {
                let mut dq = VecDeque::with_capacity(cards.len());
                for &c in cards {
                    match dq.front() {
                        Some(&front) if c > front => dq.push_back(c),
                        _ => dq.push_front(c),
                    }
                }
                dq.into_iter().map(char::from).collect()
            })
            .collect()
    }

    fn render(&self, output: &Vec<String>, out: &mut String) {
        for s in output {
            push_line(out, [s]);
        }
    }
}
