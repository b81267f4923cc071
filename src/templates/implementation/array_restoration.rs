//! Recover `A` from `B`, where `B` is `A` overlaid with a copy of itself
//! shifted by `(x, y)` and overlapping cells are summed.

use crate::templates::prelude::*;

pub struct ArrayRestoration;

static INFO: TemplateInfo = TemplateInfo {
    id: "16967",
    title: "Restore the array",
    category: Category::Implementation,
    input: &[
        Field::int("h"),
        Field::int("w"),
        Field::int("x"),
        Field::int("y"),
        Field::int("b").repeat("(h + x) * (w + y)"),
    ],
    output: &[Field::int("a").repeat("h * w")],
    constraints: &["2 <= h, w <= 300", "1 <= x < h", "1 <= y < w", "0 <= b <= 1000"],
    samples: &[
        Sample {
            input: "2 4 1 1\n1 2 3 4 0\n5 7 9 11 4\n0 5 6 7 8\n",
            output: "1 2 3 4\n5 6 7 8\n",
        },
        Sample {
            input: "3 3 2 1\n1 2 3 0\n4 5 6 0\n7 9 11 3\n0 4 5 6\n",
            output: "1 2 3\n4 5 6\n7 8 9\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub h: usize,
    pub w: usize,
    pub x: usize,
    pub y: usize,
    pub b: Grid<i32>,
}

impl Template for ArrayRestoration {
    type Input = Input;
    type Output = Grid<i32>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let h = sc.next_in("h", 2..=300usize)?;
        let w = sc.next_in("w", 2..=300usize)?;
        let x = sc.next_in("x", 1..=h - 1)?;
        let y = sc.next_in("y", 1..=w - 1)?;
        let b = sc.grid_in("b", h + x, w + y, 0..=1000)?;
        Ok(Input { h, w, x, y, b })
    }

    fn solve(&self, input: &Input) -> Grid<i32> {
        let mut a = Grid::new(input.h, input.w, 0);
        for (i, j) in a.positions() {
            a[(i, j)] = if i >= input.x && j >= input.y {
                input.b[(i, j)] - a[(i - input.x, j - input.y)]
            } else {
                input.b[(i, j)]
            };
        }
        a
    }

    fn render(&self, output: &Grid<i32>, out: &mut String) {
        for r in 0..output.rows() {
            push_line(out, output.row(r));
        }
    }
}
