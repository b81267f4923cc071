//! Taskmasters overheard by a walker who hears anyone on or next to
//! (including diagonally) the cell it stands on.

use crate::templates::prelude::*;

pub struct Eavesdropping;

static INFO: TemplateInfo = TemplateInfo {
    id: "3237",
    title: "Uhode",
    category: Category::Implementation,
    input: &[
        Field::int("n"),
        Field::int("taskmaster").repeat("2 * n"),
        Field::int("k"),
        Field::word("walk"),
    ],
    output: &[Field::int("overheard").until_end()],
    constraints: &[
        "1 <= n <= 100",
        "-1000 <= taskmaster coordinates <= 1000",
        "1 <= k <= 100, walk has k moves over I (east), S (north), Z (west), J (south)",
        "prints -1 when nobody is overheard",
    ],
    samples: &[
        Sample {
            input: "3\n3 4\n-1 0\n5 2\n8\nSSSIIISS\n",
            output: "1\n2\n",
        },
        Sample {
            input: "2\n10 10\n-5 3\n3\nZZJ\n",
            output: "-1\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub taskmasters: Vec<(i32, i32)>,
    pub walk: Vec<(i32, i32)>,
}

impl Template for Eavesdropping {
    type Input = Input;
    /// 1-based indices of overheard taskmasters.
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        let taskmasters = (0..n)
            .map(|_| Ok((sc.next_in("taskmaster", -1000..=1000)?, sc.next_in("taskmaster", -1000..=1000)?)))
            .collect::<Result<_, InputError>>()?;
        let k = sc.next_in("k", 1..=100usize)?;
        let walk = sc
            .word_of_len("walk", k)?
            .bytes()
            .map(|b| match b {
                b'I' => Ok((1, 0)),
                b'S' => Ok((0, 1)),
                b'Z' => Ok((-1, 0)),
                b'J' => Ok((0, -1)),
                _ => Err(InputError::constraint("walk", format!("unknown move {:?}", b as char))),
            })
            .collect::<Result<_, _>>()?;
        Ok(Input { taskmasters, walk })
    }

    fn solve(&self, input: &Input) -> Vec<usize> {
        let mut heard = vec![false; input.taskmasters.len()];
        let mut at = (0, 0);
        let stops = std::iter::once((0, 0)).chain(input.walk.iter().copied());
        for (dx, dy) in stops {
            at = (at.0 + dx, at.1 + dy);
            for (i, &(x, y)) in input.taskmasters.iter().enumerate() {
                if (x - at.0).abs() <= 1 && (y - at.1).abs() <= 1 {
                    heard[i] = true;
                }
            }
        }
        (1..=heard.len()).filter(|&i| heard[i - 1]).collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        if output.is_empty() {
            push_line(out, ["-1"]);
        }
        for i in output {
            push_line(out, [i]);
        }
    }
}
