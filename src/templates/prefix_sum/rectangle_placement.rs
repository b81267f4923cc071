//! Cheapest spot for a two-part vehicle on a weighted lot.
//!
//! The vehicle is a front of `a × b` cells and a trailer of `a × c` cells.
//! It either parks straight, occupying `a × (b + c)`, or jack-knifed: one
//! part lies flat and the other, turned to `length × a`, touches it at the
//! lower-right corner. The answer is the minimum covered weight.

use super::PrefixSums2D;
use crate::templates::prelude::*;

pub struct RectanglePlacement;

static INFO: TemplateInfo = TemplateInfo {
    id: "28420",
    title: "Car the garden",
    category: Category::PrefixSum,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("a"),
        Field::int("b"),
        Field::int("c"),
        Field::int("weight").repeat("n * m"),
    ],
    output: &[Field::int("weight")],
    constraints: &[
        "1 <= n, m <= 50",
        "1 <= a, b, c <= 50",
        "0 <= weight <= 1000000",
        "at least one placement fits inside the lot",
    ],
    samples: &[
        Sample {
            input: "3 4 1 2 1\n1 2 3 4\n5 6 7 8\n9 1 2 3\n",
            output: "6\n",
        },
        Sample {
            input: "4 4 2 1 1\n1 9 9 9\n1 1 9 9\n9 1 1 9\n9 9 1 1\n",
            output: "4\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub lot: Grid<u64>,
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

/// Total weight of every placement anchored at `(r, c)` that fits.
fn placements(ps: &PrefixSums2D, input: &Input, (r, col): (usize, usize)) -> [Option<u64>; 3] {
    let Input { a, b, c, .. } = *input;
    let bent = |first: usize, second: usize| {
        Some(ps.block((r, col), a, first)? + ps.block((r + a, col + first), second, a)?)
    };
    [ps.block((r, col), a, b + c), bent(c, b), bent(b, c)]
}

/// True if some placement fits a `rows × cols` lot.
fn fits(rows: usize, cols: usize, a: usize, b: usize, c: usize) -> bool {
    let straight = a <= rows && b + c <= cols;
    let bent = |first: usize, second: usize| a + second <= rows && first + a <= cols;
    straight || bent(c, b) || bent(b, c)
}

impl Template for RectanglePlacement {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        let m = sc.next_in("m", 1..=50usize)?;
        let a = sc.next_in("a", 1..=50usize)?;
        let b = sc.next_in("b", 1..=50usize)?;
        let c = sc.next_in("c", 1..=50usize)?;
        if !fits(n, m, a, b, c) {
            return Err(InputError::constraint("c", "the vehicle fits nowhere on the lot"));
        }
        let lot = sc.grid_in("weight", n, m, 0..=1_000_000)?;
        Ok(Input { lot, a, b, c })
    }

    fn solve(&self, input: &Input) -> u64 {
        let ps = PrefixSums2D::new(&input.lot);
        input
            .lot
            .positions()
            .flat_map(|at| placements(&ps, input, at))
            .flatten()
            .min()
            .unwrap_or(0)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bent_placement_can_win() {
        let lot = Grid::from_rows(vec![vec![1, 9, 9], vec![9, 1, 9], vec![9, 1, 9]]).unwrap();
        let input = Input { lot, a: 1, b: 1, c: 2 };
        // every straight row costs 19; a 1x1 front at (0, 0) with the trailer turned down column 1 costs 3
        assert_eq!(RectanglePlacement.solve(&input), 3);
    }
}
