//! Fewest cells on a path from the top-left to the bottom-right corner of a
//! maze, counting both ends.

use std::collections::VecDeque;

use crate::templates::prelude::*;

pub struct MazePath;

static INFO: TemplateInfo = TemplateInfo {
    id: "2178",
    title: "Maze search",
    category: Category::GraphTheory,
    input: &[Field::int("n"), Field::int("m"), Field::word("row").repeat("n")],
    output: &[Field::int("cells")],
    constraints: &[
        "2 <= n, m <= 100",
        "each row is m characters of 0 (wall) and 1 (open)",
        "-1 is printed when the exit cannot be reached",
    ],
    samples: &[
        Sample {
            input: "4 6\n101111\n101010\n101011\n111011\n",
            output: "15\n",
        },
        Sample {
            input: "4 6\n110110\n110110\n111111\n111101\n",
            output: "9\n",
        },
    ],
};

impl Template for MazePath {
    type Input = Grid<bool>;
    type Output = Option<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Grid<bool>, InputError> {
        let n = sc.next_in("n", 2..=100usize)?;
        let m = sc.next_in("m", 2..=100usize)?;
        let mut open = Grid::new(n, m, false);
        for r in 0..n {
            let row = sc.word_of_len("row", m)?;
            if !row.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(InputError::constraint("row", "expected only 0 and 1"));
            }
            for (c, b) in row.bytes().enumerate() {
                open[(r, c)] = b == b'1';
            }
        }
        Ok(open)
    }

    fn solve(&self, open: &Grid<bool>) -> Option<usize> {
        if !open[(0, 0)] {
            return None;
        }
        let target = (open.rows() - 1, open.cols() - 1);
        let mut dist: Grid<Option<usize>> = Grid::new(open.rows(), open.cols(), None);
        dist[(0, 0)] = Some(1);
        let mut queue = VecDeque::from([(0, 0)]);
        while let Some(p) = queue.pop_front() {
            let d = dist[p]?;
            if p == target {
                return Some(d);
            }
            for q in open.neighbours4(p.0, p.1) {
                if open[q] && dist[q].is_none() {
                    dist[q] = Some(d + 1);
                    queue.push_back(q);
                }
            }
        }
        None
    }

    fn render(&self, output: &Option<usize>, out: &mut String) {
        match output {
            Some(d) => push_line(out, [d]),
            None => push_line(out, ["-1"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walled_exit_is_unreachable() {
        let open = Grid::from_rows(vec![vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(MazePath.solve(&open), None);
    }
}
