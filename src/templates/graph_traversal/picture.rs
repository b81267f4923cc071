//! Number of pictures (4-connected painted regions) and the largest area.

use super::flood;
use crate::templates::prelude::*;

pub struct Picture;

static INFO: TemplateInfo = TemplateInfo {
    id: "1926",
    title: "Picture",
    category: Category::GraphTraversal,
    input: &[Field::int("n"), Field::int("m"), Field::int("cell").repeat("n * m")],
    output: &[Field::int("pictures"), Field::int("largest")],
    constraints: &["1 <= n, m <= 500", "cell is 0 or 1", "largest is 0 when nothing is painted"],
    samples: &[Sample {
        input: "6 5\n1 1 0 1 1\n0 1 1 0 0\n0 0 0 0 0\n1 0 1 1 1\n0 0 1 1 1\n0 0 1 1 1\n",
        output: "4\n9\n",
    }],
};

impl Template for Picture {
    type Input = Grid<u8>;
    type Output = (usize, usize);

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Grid<u8>, InputError> {
        let n = sc.next_in("n", 1..=500usize)?;
        let m = sc.next_in("m", 1..=500usize)?;
        sc.grid_in("cell", n, m, 0..=1u8)
    }

    fn solve(&self, paper: &Grid<u8>) -> (usize, usize) {
        let mut seen = Grid::new(paper.rows(), paper.cols(), false);
        let (mut count, mut largest) = (0, 0);
        for p in paper.positions() {
            if paper[p] == 1 && !seen[p] {
                count += 1;
                largest = largest.max(flood(paper, p, &mut seen, |_, q| paper[q] == 1));
            }
        }
        (count, largest)
    }

    fn render(&self, &(count, largest): &(usize, usize), out: &mut String) {
        push_line(out, [count]);
        push_line(out, [largest]);
    }
}
