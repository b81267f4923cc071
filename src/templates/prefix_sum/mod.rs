//! Cumulative sums for constant-time range queries.

mod divisible_sums;
mod range_sums;
mod rectangle_placement;
mod table_sums;

pub use divisible_sums::DivisibleSums;
pub use range_sums::RangeSums;
pub use rectangle_placement::RectanglePlacement;
pub use table_sums::TableSums;

use crate::grid::Grid;
use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(TableSums),
        Box::new(DivisibleSums),
        Box::new(RangeSums),
        Box::new(RectanglePlacement),
    ]
}

/// Inclusive 2D prefix sums: `sums[(r, c)]` covers every cell above and to
/// the left of `(r, c)` in 1-based terms, with a zero border row and column.
#[derive(Debug, Clone)]
pub(crate) struct PrefixSums2D {
    sums: Grid<u64>,
}

impl PrefixSums2D {
    pub(crate) fn new(values: &Grid<u64>) -> Self {
        let mut sums = Grid::new(values.rows() + 1, values.cols() + 1, 0u64);
        for (r, c) in values.positions() {
            sums[(r + 1, c + 1)] = values[(r, c)] + sums[(r, c + 1)] + sums[(r + 1, c)] - sums[(r, c)];
        }
        Self { sums }
    }

    /// Sum over the 0-based inclusive rectangle `top..=bottom × left..=right`.
    pub(crate) fn rect(&self, (top, left): (usize, usize), (bottom, right): (usize, usize)) -> u64 {
        self.sums[(bottom + 1, right + 1)] + self.sums[(top, left)]
            - self.sums[(top, right + 1)]
            - self.sums[(bottom + 1, left)]
    }

    /// Like [`rect`](Self::rect) for a block of `height × width` cells
    /// anchored at `(r, c)`, or `None` if it leaves the table.
    pub(crate) fn block(&self, (r, c): (usize, usize), height: usize, width: usize) -> Option<u64> {
        let bottom = r + height;
        let right = c + width;
        (height > 0 && width > 0 && bottom < self.sums.rows() && right < self.sums.cols())
            .then(|| self.rect((r, c), (bottom - 1, right - 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangles_match_direct_sums() {
        let values = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let ps = PrefixSums2D::new(&values);
        assert_eq!(ps.rect((0, 0), (1, 2)), 21);
        assert_eq!(ps.rect((1, 1), (1, 2)), 11);
        assert_eq!(ps.block((0, 1), 2, 2), Some(16));
        assert_eq!(ps.block((1, 1), 2, 1), None);
    }
}
