//! Walking distance from the single target cell to every land cell.

use std::collections::VecDeque;

use crate::templates::prelude::*;

pub struct DistanceField;

static INFO: TemplateInfo = TemplateInfo {
    id: "14940",
    title: "Easy shortest distance",
    category: Category::GraphTraversal,
    input: &[Field::int("n"), Field::int("m"), Field::int("cell").repeat("n * m")],
    output: &[Field::int("distance").repeat("n * m")],
    constraints: &[
        "2 <= n, m <= 1000",
        "cell is 0 (water), 1 (land) or 2 (target); exactly one cell is 2",
        "unreachable land prints -1, water prints 0",
    ],
    samples: &[
        Sample {
            input: "3 4\n2 1 1 1\n1 0 0 1\n1 1 0 1\n",
            output: "0 1 2 3\n1 0 0 4\n2 3 0 5\n",
        },
        Sample {
            input: "4 4\n1 1 0 1\n1 0 2 1\n0 1 1 0\n0 0 0 0\n",
            output: "-1 -1 0 2\n-1 0 0 1\n0 2 1 0\n0 0 0 0\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub cells: Grid<u8>,
    pub target: (usize, usize),
}

impl Template for DistanceField {
    type Input = Input;
    type Output = Grid<i64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 2..=1000usize)?;
        let m = sc.next_in("m", 2..=1000usize)?;
        let cells = sc.grid_in("cell", n, m, 0..=2u8)?;
        let mut targets = cells.positions().filter(|&p| cells[p] == 2);
        match (targets.next(), targets.next()) {
            (Some(target), None) => Ok(Input { cells, target }),
            _ => Err(InputError::constraint("cell", "expected exactly one target cell")),
        }
    }

    fn solve(&self, input: &Input) -> Grid<i64> {
        let cells = &input.cells;
        let mut dist: Grid<Option<i64>> = Grid::new(cells.rows(), cells.cols(), None);
        dist[input.target] = Some(0);
        let mut queue = VecDeque::from([(input.target, 0i64)]);
        while let Some((p, d)) = queue.pop_front() {
            for q in cells.neighbours4(p.0, p.1) {
                if cells[q] == 1 && dist[q].is_none() {
                    dist[q] = Some(d + 1);
                    queue.push_back((q, d + 1));
                }
            }
        }
        let mut field = Grid::new(cells.rows(), cells.cols(), 0);
        for p in cells.positions() {
            field[p] = match (cells[p], dist[p]) {
                (0, _) => 0,
                (_, Some(d)) => d,
                (_, None) => -1,
            };
        }
        field
    }

    fn render(&self, output: &Grid<i64>, out: &mut String) {
        for r in 0..output.rows() {
            push_line(out, output.row(r));
        }
    }
}
