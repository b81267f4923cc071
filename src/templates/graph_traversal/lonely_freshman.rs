//! People reachable from the freshman's seat on a campus map.

use super::flood;
use crate::templates::prelude::*;

pub struct LonelyFreshman;

static INFO: TemplateInfo = TemplateInfo {
    id: "21736",
    title: "Freshman needs friends",
    category: Category::GraphTraversal,
    input: &[Field::int("n"), Field::int("m"), Field::word("row").repeat("n")],
    output: &[Field::word("met")],
    constraints: &[
        "1 <= n, m <= 600",
        "rows use O (empty), X (wall), I (freshman, exactly once), P (person)",
        "prints TT when nobody can be met",
    ],
    samples: &[
        Sample {
            input: "3 5\nOOOPO\nOIOOX\nOOOXP\n",
            output: "1\n",
        },
        Sample {
            input: "3 3\nIOX\nOXP\nXPP\n",
            output: "TT\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub campus: Grid<u8>,
    pub start: (usize, usize),
}

impl Template for LonelyFreshman {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=600usize)?;
        let m = sc.next_in("m", 1..=600usize)?;
        let campus = sc.byte_grid("row", n, m)?;
        if campus.iter().any(|b| !b"OXIP".contains(b)) {
            return Err(InputError::constraint("row", "expected only O, X, I and P"));
        }
        let mut starts = campus.positions().filter(|&p| campus[p] == b'I');
        match (starts.next(), starts.next()) {
            (Some(start), None) => Ok(Input { campus, start }),
            _ => Err(InputError::constraint("row", "expected exactly one I")),
        }
    }

    fn solve(&self, input: &Input) -> usize {
        let campus = &input.campus;
        let mut seen = Grid::new(campus.rows(), campus.cols(), false);
        let mut met = 0;
        flood(campus, input.start, &mut seen, |_, q| {
            let open = campus[q] != b'X';
            if open && campus[q] == b'P' {
                met += 1;
            }
            open
        });
        met
    }

    fn render(&self, output: &usize, out: &mut String) {
        match output {
            0 => push_line(out, ["TT"]),
            n => push_line(out, [n]),
        }
    }
}
