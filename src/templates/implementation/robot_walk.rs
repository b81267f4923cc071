//! Final cell of a robot that repeatedly cycles through four directions,
//! moving straight until blocked by a wall, an obstacle or its own trail.

use crate::templates::prelude::*;

pub struct RobotWalk;

static INFO: TemplateInfo = TemplateInfo {
    id: "13901",
    title: "Robot",
    category: Category::Implementation,
    input: &[
        Field::int("r"),
        Field::int("c"),
        Field::int("k"),
        Field::int("obstacle").repeat("2 * k"),
        Field::int("start").repeat("2"),
        Field::int("direction").repeat("4"),
    ],
    output: &[Field::int("row"), Field::int("col")],
    constraints: &[
        "1 <= r, c <= 1000",
        "0 <= k <= r * c",
        "0 <= obstacle and start rows < r, columns < c",
        "direction is a permutation of 1 up, 2 down, 3 left, 4 right",
    ],
    samples: &[
        Sample {
            input: "3 7\n1\n1 1\n0 0\n1 2 3 4\n",
            output: "0 1\n",
        },
        Sample {
            input: "3 3\n0\n1 1\n4 2 3 1\n",
            output: "0 2\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub blocked: Grid<bool>,
    pub start: (usize, usize),
    /// Indices into the four unit moves.
    pub order: [usize; 4],
}

fn cell(sc: &mut Scanner<'_>, field: &'static str, rows: usize, cols: usize) -> Result<(usize, usize), InputError> {
    Ok((sc.next_in(field, 0..=rows - 1)?, sc.next_in(field, 0..=cols - 1)?))
}

impl Template for RobotWalk {
    type Input = Input;
    type Output = (usize, usize);

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let r = sc.next_in("r", 1..=1000usize)?;
        let c = sc.next_in("c", 1..=1000usize)?;
        let k = sc.next_in("k", 0..=r * c)?;
        let mut blocked = Grid::new(r, c, false);
        for _ in 0..k {
            let p = cell(sc, "obstacle", r, c)?;
            blocked[p] = true;
        }
        let start = cell(sc, "start", r, c)?;
        let mut order = [0; 4];
        for slot in &mut order {
            *slot = sc.next_in("direction", 1..=4usize)? - 1;
        }
        let mut sorted = order;
        sorted.sort_unstable();
        if sorted != [0, 1, 2, 3] {
            return Err(InputError::constraint("direction", "expected each direction once"));
        }
        Ok(Input { blocked, start, order })
    }

    fn solve(&self, input: &Input) -> (usize, usize) {
        // up, down, left, right
        const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        let mut visited = input.blocked.clone();
        let mut at = input.start;
        visited[at] = true;
        loop {
            let mut moved = false;
            for &d in &input.order {
                let (dr, dc) = MOVES[d];
                loop {
                    let (nr, nc) = (at.0 as isize + dr, at.1 as isize + dc);
                    match visited.get_signed(nr, nc) {
                        Some(&false) => {
                            at = (nr as usize, nc as usize);
                            visited[at] = true;
                            moved = true;
                        }
                        _ => break,
                    }
                }
            }
            if !moved {
                return at;
            }
        }
    }

    fn render(&self, &(r, c): &(usize, usize), out: &mut String) {
        push_line(out, [r, c]);
    }
}
