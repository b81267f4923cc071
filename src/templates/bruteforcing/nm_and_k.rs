//! Maximum sum of `k` pairwise non-adjacent cells in a small grid.

use crate::templates::prelude::*;

pub struct NmAndK;

static INFO: TemplateInfo = TemplateInfo {
    id: "18290",
    title: "NM and K (1)",
    category: Category::Bruteforcing,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("k"),
        Field::int("cell").repeat("n * m"),
    ],
    output: &[Field::int("best")],
    constraints: &[
        "1 <= n, m <= 10",
        "1 <= k <= min(4, ceil(n * m / 2))",
        "-10000 <= cell <= 10000",
    ],
    samples: &[
        Sample {
            input: "1 1 1\n1\n",
            output: "1\n",
        },
        Sample {
            input: "2 2 2\n5 4\n4 5\n",
            output: "10\n",
        },
        Sample {
            input: "5 5 3\n1 9 8 -2 0\n-1 9 8 -3 0\n-5 1 9 -1 0\n0 0 0 9 8\n9 9 9 0 0\n",
            output: "27\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub k: usize,
    pub cells: Grid<i32>,
}

fn search(cells: &Grid<i32>, taken: &mut Grid<bool>, from: usize, left: usize) -> Option<i32> {
    if left == 0 {
        return Some(0);
    }
    let total = cells.rows() * cells.cols();
    let mut best: Option<i32> = None;
    for idx in from..total {
        let (r, c) = (idx / cells.cols(), idx % cells.cols());
        if taken.neighbours4(r, c).any(|p| taken[p]) {
            continue;
        }
        taken[(r, c)] = true;
        if let Some(rest) = search(cells, taken, idx + 1, left - 1) {
            let sum = rest + cells[(r, c)];
            best = Some(best.map_or(sum, |b| b.max(sum)));
        }
        taken[(r, c)] = false;
    }
    best
}

impl Template for NmAndK {
    type Input = Input;
    type Output = i32;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=10usize)?;
        let m = sc.next_in("m", 1..=10usize)?;
        let k = sc.next_in("k", 1..=4usize.min((n * m).div_ceil(2)))?;
        let mut cells = Grid::new(n, m, 0);
        for r in 0..n {
            for c in 0..m {
                cells[(r, c)] = sc.next_in("cell", -10_000..=10_000)?;
            }
        }
        Ok(Input { k, cells })
    }

    fn solve(&self, input: &Input) -> i32 {
        let mut taken = Grid::new(input.cells.rows(), input.cells.cols(), false);
        // a checkerboard colour class always holds ceil(n*m/2) cells
        search(&input.cells, &mut taken, 0, input.k).unwrap_or_default()
    }

    fn render(&self, output: &i32, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_cells_still_counted() {
        let cells = Grid::from_rows(vec![vec![-1, -2], vec![-3, -4]]).unwrap();
        assert_eq!(NmAndK.solve(&Input { k: 2, cells }), -5);
    }
}
