//! Row-major 2D storage sized to the instance at hand.
//!
//! Grid-shaped templates allocate one of these per invocation, so no state is
//! shared between runs.

use std::ops::{Index, IndexMut};

/// Offsets for the four orthogonal neighbours: up, down, left, right.
pub static DIRS4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Dense `rows × cols` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Reset every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|c| *c = value.clone());
    }
}

impl<T> Grid<T> {
    /// Build from rows of equal length.
    ///
    /// Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != m) {
            return None;
        }
        Some(Self {
            rows: n,
            cols: m,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build from `rows * cols` cells in row-major order.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == rows * cols).then_some(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<&T> {
        if r < self.rows && c < self.cols {
            self.cells.get(r * self.cols + c)
        } else {
            None
        }
    }

    /// Cell at a signed position; out-of-bounds yields `None`.
    #[inline]
    pub fn get_signed(&self, r: isize, c: isize) -> Option<&T> {
        if r < 0 || c < 0 {
            return None;
        }
        self.get(r as usize, c as usize)
    }

    /// One row as a slice.
    pub fn row(&self, r: usize) -> &[T] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// In-bounds orthogonal neighbours of `(r, c)`.
    pub fn neighbours4(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        DIRS4.iter().filter_map(move |&(dr, dc)| {
            let nr = r as isize + dr;
            let nc = c as isize + dc;
            (nr >= 0 && nc >= 0 && nr < rows && nc < cols).then_some((nr as usize, nc as usize))
        })
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| (i / cols, i % cols))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        assert!(r < self.rows && c < self.cols, "grid index ({r}, {c}) out of bounds");
        &self.cells[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        assert!(r < self.rows && c < self.cols, "grid index ({r}, {c}) out of bounds");
        &mut self.cells[r * self.cols + c]
    }
}

#[cfg(test)]
mod tests {
    use super::Grid;

    #[test]
    fn corner_has_two_neighbours() {
        let g = Grid::new(3, 4, 0u8);
        let mut n: Vec<_> = g.neighbours4(0, 0).collect();
        n.sort();
        assert_eq!(n, vec![(0, 1), (1, 0)]);
        assert_eq!(g.neighbours4(1, 1).count(), 4);
        assert_eq!(g.neighbours4(2, 3).count(), 2);
    }

    #[test]
    fn ragged_rows_rejected() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(g[(1, 0)], 3);
        assert_eq!(g.row(0), &[1, 2]);
    }

    #[test]
    fn signed_access_out_of_bounds() {
        let mut g = Grid::new(2, 2, 'x');
        g[(1, 1)] = 'y';
        assert_eq!(g.get_signed(-1, 0), None);
        assert_eq!(g.get_signed(1, 1), Some(&'y'));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.positions().count(), 4);
    }
}
