//! Longest round trip to the party village and back.
//!
//! Outbound distances come from one Dijkstra on the reversed roads, return
//! distances from one on the roads as given.

use crate::graph::{dijkstra, reachable, require_all_reached};
use crate::templates::prelude::*;

pub struct Party;

static INFO: TemplateInfo = TemplateInfo {
    id: "1238",
    title: "Party",
    category: Category::ShortestPath,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("x"),
        Field::int("road").repeat("3 * m"),
    ],
    output: &[Field::int("longest")],
    constraints: &[
        "1 <= n <= 1000",
        "1 <= m <= 10000",
        "1 <= x <= n",
        "road is `from to time` with 1 <= time <= 100",
        "every student can reach x and get back",
    ],
    samples: &[Sample {
        input: "4 8 2\n1 2 4\n1 3 2\n1 4 7\n2 1 1\n2 3 5\n3 1 2\n3 4 4\n4 2 3\n",
        output: "10\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub party: usize,
    pub roads: Vec<Vec<(usize, u64)>>,
    pub reversed: Vec<Vec<(usize, u64)>>,
}

impl Template for Party {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=1000usize)?;
        let m = sc.next_in("m", 1..=10_000usize)?;
        let party = sc.next_in("x", 1..=n)?;
        let mut roads = vec![Vec::new(); n + 1];
        let mut reversed = vec![Vec::new(); n + 1];
        for _ in 0..m {
            let from = sc.next_in("road", 1..=n)?;
            let to = sc.next_in("road", 1..=n)?;
            let time = sc.next_in("road", 1..=100u64)?;
            roads[from].push((to, time));
            reversed[to].push((from, time));
        }
        require_all_reached("road", &reachable(&reversed, party))?;
        require_all_reached("road", &reachable(&roads, party))?;
        Ok(Input { party, roads, reversed })
    }

    fn solve(&self, input: &Input) -> u64 {
        let there = dijkstra(&input.reversed, input.party);
        let back = dijkstra(&input.roads, input.party);
        there
            .iter()
            .zip(&back)
            .skip(1)
            .filter_map(|(t, b)| Some(t.as_ref()? + b.as_ref()?))
            .max()
            .unwrap_or(0)
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
