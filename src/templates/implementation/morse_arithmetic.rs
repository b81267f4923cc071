//! Evaluate a sum of products whose operands are written in a Morse-like
//! tally: `-` 5, `.` 1, `=` 10, `:` 2.

use crate::templates::prelude::*;

pub struct MorseArithmetic;

static INFO: TemplateInfo = TemplateInfo {
    id: "9523",
    title: "Arithmetic with Morse",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::word("token").repeat("2 * n + 1")],
    output: &[Field::int("value")],
    constraints: &[
        "0 <= n <= 100",
        "tokens alternate operand, operator (`+` or `*`), ..., operand",
        "operands are at most 7 tally marks over - . = :",
        "the value is below 2^63",
    ],
    samples: &[
        Sample {
            input: "2\n-- * : + =\n",
            output: "30\n",
        },
        Sample {
            input: "0\n-.\n",
            output: "6\n",
        },
    ],
};

fn tally(sc: &mut Scanner<'_>) -> Result<u64, InputError> {
    let word = sc.word_of("token", |b| b"-.=:".contains(&b))?;
    if word.len() > 7 {
        return Err(InputError::constraint("token", "operand longer than 7 marks"));
    }
    Ok(word
        .bytes()
        .map(|b| match b {
            b'-' => 5,
            b'.' => 1,
            b'=' => 10,
            _ => 2,
        })
        .sum())
}

impl Template for MorseArithmetic {
    /// Products of the sum, each a list of operands.
    type Input = Vec<Vec<u64>>;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<u64>>, InputError> {
        let n = sc.next_in("n", 0..=100usize)?;
        let mut terms = vec![vec![tally(sc)?]];
        for _ in 0..n {
            match sc.token("token")? {
                "+" => terms.push(Vec::new()),
                "*" => {}
                other => {
                    return Err(InputError::Invalid {
                        field: "token",
                        token: other.to_string(),
                    })
                }
            }
            let operand = tally(sc)?;
            if let Some(term) = terms.last_mut() {
                term.push(operand);
            }
        }
        Ok(terms)
    }

    fn solve(&self, terms: &Vec<Vec<u64>>) -> u64 {
        terms
            .iter()
            .map(|t| t.iter().fold(1u64, |acc, &v| acc.saturating_mul(v)))
            .fold(0u64, u64::saturating_add)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
