//! Whether one flag can be repainted into another by recolouring whole
//! same-coloured regions, i.e. every region of the first flag is a single
//! colour in the second.

use super::flood;
use crate::templates::prelude::*;

pub struct FlagRecolouring;

static INFO: TemplateInfo = TemplateInfo {
    id: "30702",
    title: "Flag colouring",
    category: Category::GraphTraversal,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::word("before").repeat("n"),
        Field::word("after").repeat("n"),
    ],
    output: &[Field::word("verdict")],
    constraints: &["1 <= n, m <= 50", "rows are m uppercase letters"],
    samples: &[
        Sample {
            input: "3 3\nAAB\nABB\nCCC\nDDE\nDEE\nFFF\n",
            output: "YES\n",
        },
        Sample {
            input: "2 2\nAA\nAA\nAB\nAB\n",
            output: "NO\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub before: Grid<u8>,
    pub after: Grid<u8>,
}

fn flag(sc: &mut Scanner<'_>, field: &'static str, n: usize, m: usize) -> Result<Grid<u8>, InputError> {
    let g = sc.byte_grid(field, n, m)?;
    if g.iter().any(|b| !b.is_ascii_uppercase()) {
        return Err(InputError::constraint(field, "expected uppercase letters"));
    }
    Ok(g)
}

impl Template for FlagRecolouring {
    type Input = Input;
    type Output = bool;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        let m = sc.next_in("m", 1..=50usize)?;
        let before = flag(sc, "before", n, m)?;
        let after = flag(sc, "after", n, m)?;
        Ok(Input { before, after })
    }

    fn solve(&self, input: &Input) -> bool {
        let (before, after) = (&input.before, &input.after);
        let mut seen = Grid::new(before.rows(), before.cols(), false);
        let mut uniform = true;
        for p in before.positions() {
            if seen[p] {
                continue;
            }
            flood(before, p, &mut seen, |from, to| {
                let same = before[from] == before[to];
                if same && after[from] != after[to] {
                    uniform = false;
                }
                same
            });
        }
        uniform
    }

    fn render(&self, output: &bool, out: &mut String) {
        push_line(out, [if *output { "YES" } else { "NO" }]);
    }
}
