//! Score from homework handled last-in first-out, one minute of work per
//! minute of the term.

use crate::templates::prelude::*;

pub struct HomeworkStack;

static INFO: TemplateInfo = TemplateInfo {
    id: "17952",
    title: "Homework of a grad student",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::line("minute").repeat("n")],
    output: &[Field::int("score")],
    constraints: &[
        "1 <= n <= 1000000",
        "minute is `0` (nothing new) or `1 a t` with 1 <= a <= 100 points and 1 <= t <= 1000000 minutes",
    ],
    samples: &[
        Sample {
            input: "3\n1 100 3\n0\n0\n",
            output: "100\n",
        },
        Sample {
            input: "5\n1 10 3\n0\n1 100 2\n0\n1 20 1\n",
            output: "120\n",
        },
    ],
};

/// `(points, minutes)` handed out at each minute.
pub type Input = Vec<Option<(u64, u32)>>;

impl Template for HomeworkStack {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1_000_000usize)?;
        (0..n)
            .map(|_| match sc.next_in("minute", 0..=1u8)? {
                0 => Ok(None),
                _ => {
                    let a = sc.next_in("minute", 1..=100)?;
                    let t = sc.next_in("minute", 1..=1_000_000)?;
                    Ok(Some((a, t)))
                }
            })
            .collect()
    }

    fn solve(&self, minutes: &Input) -> u64 {
        let mut pending: Vec<(u64, u32)> = Vec::new();
        let mut score = 0;
        for minute in minutes {
            if let Some(task) = minute {
                pending.push(*task);
            }
            if let Some(top) = pending.last_mut() {
                top.1 -= 1;
                if top.1 == 0 {
                    score += top.0;
                    pending.pop();
                }
            }
        }
        score
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
