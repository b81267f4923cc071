//! Cheapest bus fare between two cities (Dijkstra over directed routes).

use crate::graph::dijkstra;
use crate::templates::prelude::*;

pub struct MinCost;

static INFO: TemplateInfo = TemplateInfo {
    id: "1916",
    title: "Minimum cost",
    category: Category::GraphTheory,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("route").repeat("3 * m"),
        Field::int("from"),
        Field::int("to"),
    ],
    output: &[Field::int("cost")],
    constraints: &[
        "1 <= n <= 1000",
        "1 <= m <= 100000",
        "each route is `start end fare` with 0 <= fare <= 100000",
        "-1 is printed when the destination cannot be reached",
    ],
    samples: &[Sample {
        input: "5\n8\n1 2 2\n1 3 3\n1 4 1\n1 5 10\n2 4 2\n3 4 1\n3 5 1\n4 5 3\n1 5\n",
        output: "4\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    /// `(to, fare)` per city, index 0 unused.
    pub routes: Vec<Vec<(usize, u64)>>,
    pub from: usize,
    pub to: usize,
}

impl Template for MinCost {
    type Input = Input;
    type Output = Option<u64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1000usize)?;
        let m = sc.next_in("m", 1..=100_000usize)?;
        let mut routes = vec![Vec::new(); n + 1];
        for _ in 0..m {
            let s = sc.next_in("route", 1..=n)?;
            let e = sc.next_in("route", 1..=n)?;
            let fare = sc.next_in("route", 0..=100_000u64)?;
            routes[s].push((e, fare));
        }
        let from = sc.next_in("from", 1..=n)?;
        let to = sc.next_in("to", 1..=n)?;
        Ok(Input { routes, from, to })
    }

    fn solve(&self, input: &Input) -> Option<u64> {
        dijkstra(&input.routes, input.from)[input.to]
    }

    fn render(&self, output: &Option<u64>, out: &mut String) {
        match output {
            Some(c) => push_line(out, [c]),
            None => push_line(out, ["-1"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_routes_take_the_cheaper() {
        let input = Input {
            routes: vec![vec![], vec![(2, 9), (2, 4)], vec![]],
            from: 1,
            to: 2,
        };
        assert_eq!(MinCost.solve(&input), Some(4));
    }

    #[test]
    fn one_way_routes() {
        let input = Input {
            routes: vec![vec![], vec![], vec![(1, 1)]],
            from: 1,
            to: 2,
        };
        assert_eq!(MinCost.solve(&input), None);
    }
}
