//! Transitive closure of a directed graph given as an adjacency matrix.

use crate::templates::prelude::*;

pub struct Reachability;

static INFO: TemplateInfo = TemplateInfo {
    id: "11403",
    title: "Find the path",
    category: Category::ShortestPath,
    input: &[Field::int("n"), Field::int("edge").repeat("n * n")],
    output: &[Field::int("reach").repeat("n * n")],
    constraints: &["1 <= n <= 100", "edge is 0 or 1", "reach[i][i] is 1 only on a cycle through i"],
    samples: &[
        Sample {
            input: "3\n0 1 0\n0 0 1\n1 0 0\n",
            output: "1 1 1\n1 1 1\n1 1 1\n",
        },
        Sample {
            input: "7\n0 0 0 1 0 0 0\n0 0 0 0 0 0 1\n0 0 0 0 0 0 0\n0 0 0 0 1 1 0\n1 0 0 0 0 0 0\n0 0 0 0 0 0 1\n0 0 1 0 0 0 0\n",
            output: "1 0 1 1 1 1 1\n0 0 1 0 0 0 1\n0 0 0 0 0 0 0\n1 0 1 1 1 1 1\n1 0 1 1 1 1 1\n0 0 1 0 0 0 1\n0 0 1 0 0 0 0\n",
        },
    ],
};

impl Template for Reachability {
    type Input = Grid<bool>;
    type Output = Grid<bool>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Grid<bool>, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        let edges = sc.grid_in("edge", n, n, 0..=1u8)?;
        let cells = edges.iter().map(|&e| e == 1).collect();
        Grid::from_vec(n, n, cells).ok_or(InputError::Missing { field: "edge" })
    }

    fn solve(&self, edges: &Grid<bool>) -> Grid<bool> {
        let n = edges.rows();
        let mut reach = edges.clone();
        // intermediate vertex outermost
        for k in 0..n {
            for i in 0..n {
                if !reach[(i, k)] {
                    continue;
                }
                for j in 0..n {
                    if reach[(k, j)] {
                        reach[(i, j)] = true;
                    }
                }
            }
        }
        reach
    }

    fn render(&self, reach: &Grid<bool>, out: &mut String) {
        for r in 0..reach.rows() {
            push_line(out, reach.row(r).iter().map(|&b| u8::from(b)));
        }
    }
}
