//! Fewest button presses to reach floor `g` from floor `s` with an elevator
//! that only moves up `u` or down `d` floors.

use std::collections::VecDeque;

use crate::templates::prelude::*;

pub struct Elevator;

static INFO: TemplateInfo = TemplateInfo {
    id: "5014",
    title: "Startlink",
    category: Category::GraphTraversal,
    input: &[
        Field::int("f"),
        Field::int("s"),
        Field::int("g"),
        Field::int("u"),
        Field::int("d"),
    ],
    output: &[Field::line("presses")],
    constraints: &[
        "1 <= s, g <= f <= 1000000",
        "0 <= u, d <= 1000000",
        "prints `use the stairs` when g cannot be reached",
    ],
    samples: &[
        Sample {
            input: "10 1 10 2 1\n",
            output: "6\n",
        },
        Sample {
            input: "100 2 1 1 0\n",
            output: "use the stairs\n",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input {
    pub floors: usize,
    pub start: usize,
    pub goal: usize,
    pub up: usize,
    pub down: usize,
}

impl Template for Elevator {
    type Input = Input;
    type Output = Option<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let floors = sc.next_in("f", 1..=1_000_000usize)?;
        let start = sc.next_in("s", 1..=floors)?;
        let goal = sc.next_in("g", 1..=floors)?;
        let up = sc.next_in("u", 0..=1_000_000usize)?;
        let down = sc.next_in("d", 0..=1_000_000usize)?;
        Ok(Input {
            floors,
            start,
            goal,
            up,
            down,
        })
    }

    fn solve(&self, e: &Input) -> Option<usize> {
        let mut presses: Vec<Option<usize>> = vec![None; e.floors + 1];
        presses[e.start] = Some(0);
        let mut queue = VecDeque::from([(e.start, 0)]);
        while let Some((floor, p)) = queue.pop_front() {
            if floor == e.goal {
                return Some(p);
            }
            let up = Some(floor + e.up).filter(|&f| f <= e.floors);
            let down = floor.checked_sub(e.down).filter(|&f| f >= 1);
            for next in [up, down].into_iter().flatten() {
                if presses[next].is_none() {
                    presses[next] = Some(p + 1);
                    queue.push_back((next, p + 1));
                }
            }
        }
        None
    }

    fn render(&self, output: &Option<usize>, out: &mut String) {
        match output {
            Some(p) => push_line(out, [p]),
            None => push_line(out, ["use the stairs"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_there() {
        let e = Input {
            floors: 1,
            start: 1,
            goal: 1,
            up: 0,
            down: 0,
        };
        assert_eq!(Elevator.solve(&e), Some(0));
    }
}
