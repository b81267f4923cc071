//! Switch presses needed to light every bulb, where a press on bulb `(r, c)`
//! toggles the bulbs left of it in its row and below it in its column.
//!
//! Rows are stored bottom-up so the press region is `[0, c]` of row `r` plus
//! rows `0..r` of column `c`. Scanning from the far corner, each bulb is
//! final once visited, so pressing exactly the dark ones is forced.

use crate::templates::prelude::*;

pub struct Bulbs;

static INFO: TemplateInfo = TemplateInfo {
    id: "14478",
    title: "Bulbs",
    category: Category::Greedy,
    input: &[
        Field::int("t"),
        Field::int("n").repeat("t"),
        Field::int("m").repeat("t"),
        Field::word("row").repeat("n"),
    ],
    output: &[Field::int("presses").repeat("t")],
    constraints: &["1 <= t", "1 <= n, m <= 400", "rows are m characters of 0 and 1"],
    samples: &[Sample {
        input: "2\n2 2\n00\n00\n3 3\n101\n010\n111\n",
        output: "2\n6\n",
    }],
};

fn presses(lit: &Grid<bool>) -> usize {
    let mut lit = lit.clone();
    let mut count = 0;
    for r in (0..lit.rows()).rev() {
        for c in (0..lit.cols()).rev() {
            if lit[(r, c)] {
                continue;
            }
            count += 1;
            for cc in 0..=c {
                lit[(r, cc)] = !lit[(r, cc)];
            }
            for rr in 0..r {
                lit[(rr, c)] = !lit[(rr, c)];
            }
        }
    }
    count
}

impl Template for Bulbs {
    type Input = Vec<Grid<bool>>;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Grid<bool>>, InputError> {
        let t = sc.next_in("t", 1..=1000usize)?;
        (0..t)
            .map(|_| {
                let n = sc.next_in("n", 1..=400usize)?;
                let m = sc.next_in("m", 1..=400usize)?;
                let rows = sc.byte_grid("row", n, m)?;
                let mut lit = Grid::new(n, m, false);
                for (r, c) in rows.positions() {
                    lit[(n - 1 - r, c)] = match rows[(r, c)] {
                        b'0' => false,
                        b'1' => true,
                        _ => return Err(InputError::constraint("row", "expected only 0 and 1")),
                    };
                }
                Ok(lit)
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<Grid<bool>>) -> Vec<usize> {
        cases.iter().map(presses).collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for p in output {
            push_line(out, [p]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lit_needs_nothing() {
        assert_eq!(presses(&Grid::new(4, 5, true)), 0);
    }

    #[test]
    fn single_dark_corner() {
        let mut lit = Grid::new(2, 2, true);
        lit[(0, 0)] = false;
        assert_eq!(presses(&lit), 1);
    }
}
