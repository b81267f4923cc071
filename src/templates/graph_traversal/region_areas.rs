//! Areas of the regions left uncovered by rectangles on graph paper.

use super::flood;
use crate::templates::prelude::*;

pub struct RegionAreas;

static INFO: TemplateInfo = TemplateInfo {
    id: "2583",
    title: "Region areas",
    category: Category::GraphTraversal,
    input: &[
        Field::int("m"),
        Field::int("n"),
        Field::int("k"),
        Field::int("rectangle").repeat("4 * k"),
    ],
    output: &[Field::int("regions"), Field::int("area").until_end()],
    constraints: &[
        "1 <= m, n, k <= 100",
        "rectangle is `x0 y0 x1 y1` with 0 <= x0 < x1 <= n and 0 <= y0 < y1 <= m",
        "at least one cell stays uncovered",
    ],
    samples: &[Sample {
        input: "5 7 3\n0 2 4 4\n1 1 2 5\n4 0 6 2\n",
        output: "3\n1 7 13\n",
    }],
};

impl Template for RegionAreas {
    /// Covered cells, indexed by `(x, y)`.
    type Input = Grid<bool>;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Grid<bool>, InputError> {
        let m = sc.next_in("m", 1..=100usize)?;
        let n = sc.next_in("n", 1..=100usize)?;
        let k = sc.next_in("k", 1..=100usize)?;
        let mut covered = Grid::new(n, m, false);
        for _ in 0..k {
            let x0 = sc.next_in("rectangle", 0..=n - 1)?;
            let y0 = sc.next_in("rectangle", 0..=m - 1)?;
            let x1 = sc.next_in("rectangle", x0 + 1..=n)?;
            let y1 = sc.next_in("rectangle", y0 + 1..=m)?;
            for x in x0..x1 {
                for y in y0..y1 {
                    covered[(x, y)] = true;
                }
            }
        }
        if covered.iter().all(|&c| c) {
            return Err(InputError::constraint("rectangle", "the whole paper is covered"));
        }
        Ok(covered)
    }

    fn solve(&self, covered: &Grid<bool>) -> Vec<usize> {
        let mut seen = covered.clone();
        let mut areas = Vec::new();
        for p in covered.positions() {
            if !seen[p] {
                areas.push(flood(covered, p, &mut seen, |_, _| true));
            }
        }
        areas.sort_unstable();
        areas
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        push_line(out, [output.len()]);
        push_line(out, output);
    }
}
