//! Rectangle sums over a square table.

use super::PrefixSums2D;
use crate::templates::prelude::*;

pub struct TableSums;

static INFO: TemplateInfo = TemplateInfo {
    id: "11660",
    title: "Range sum query 5",
    category: Category::PrefixSum,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("cell").repeat("n * n"),
        Field::int("query").repeat("4 * m"),
    ],
    output: &[Field::int("sum").repeat("m")],
    constraints: &[
        "1 <= n <= 1024",
        "1 <= m <= 100000",
        "0 <= cell <= 1000",
        "query is `x1 y1 x2 y2` (1-based row, column) with x1 <= x2 and y1 <= y2",
    ],
    samples: &[Sample {
        input: "4 3\n1 2 3 4\n2 3 4 5\n3 4 5 6\n4 5 6 7\n2 2 3 4\n3 4 3 4\n1 1 4 4\n",
        output: "27\n6\n64\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub table: Grid<u64>,
    /// 0-based inclusive corners.
    pub queries: Vec<((usize, usize), (usize, usize))>,
}

impl Template for TableSums {
    type Input = Input;
    type Output = Vec<u64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1024usize)?;
        let m = sc.next_in("m", 1..=100_000usize)?;
        let table = sc.grid_in("cell", n, n, 0..=1000)?;
        let mut queries = Vec::with_capacity(m);
        for _ in 0..m {
            let [x1, y1, x2, y2] = [(); 4].map(|_| sc.next_in("query", 1..=n));
            let (x1, y1, x2, y2) = (x1?, y1?, x2?, y2?);
            if x1 > x2 || y1 > y2 {
                return Err(InputError::constraint("query", "corners out of order"));
            }
            queries.push(((x1 - 1, y1 - 1), (x2 - 1, y2 - 1)));
        }
        Ok(Input { table, queries })
    }

    fn solve(&self, input: &Input) -> Vec<u64> {
        let ps = PrefixSums2D::new(&input.table);
        input.queries.iter().map(|&(a, b)| ps.rect(a, b)).collect()
    }

    fn render(&self, output: &Vec<u64>, out: &mut String) {
        for s in output {
            push_line(out, [s]);
        }
    }
}
