//! Most separate dry regions over every possible flood level.

use super::flood;
use crate::templates::prelude::*;

pub struct SafeZones;

static INFO: TemplateInfo = TemplateInfo {
    id: "2468",
    title: "Safe area",
    category: Category::GraphTraversal,
    input: &[Field::int("n"), Field::int("height").repeat("n * n")],
    output: &[Field::int("regions")],
    constraints: &["2 <= n <= 100", "1 <= height <= 100"],
    samples: &[Sample {
        input: "5\n6 8 2 6 2\n3 2 3 4 6\n6 7 3 3 2\n7 2 5 3 6\n8 9 5 2 7\n",
        output: "5\n",
    }],
};

fn dry_regions(heights: &Grid<u8>, level: u8) -> usize {
    let mut seen = Grid::new(heights.rows(), heights.cols(), false);
    let mut regions = 0;
    for p in heights.positions() {
        if heights[p] > level && !seen[p] {
            regions += 1;
            flood(heights, p, &mut seen, |_, q| heights[q] > level);
        }
    }
    regions
}

impl Template for SafeZones {
    type Input = Grid<u8>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Grid<u8>, InputError> {
        let n = sc.next_in("n", 2..=100usize)?;
        sc.grid_in("height", n, n, 1..=100u8)
    }

    fn solve(&self, heights: &Grid<u8>) -> usize {
        // level 0 floods nothing, so the answer is at least 1
        (0..=100u8).map(|level| dry_regions(heights, level)).max().unwrap_or(1)
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_map_is_one_region() {
        let heights = Grid::new(3, 3, 7u8);
        assert_eq!(SafeZones.solve(&heights), 1);
    }
}
