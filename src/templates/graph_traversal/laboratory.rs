//! Largest virus-free area after building exactly three walls.

use std::collections::VecDeque;

use crate::templates::prelude::*;

pub struct Laboratory;

static INFO: TemplateInfo = TemplateInfo {
    id: "14502",
    title: "Laboratory",
    category: Category::GraphTraversal,
    input: &[Field::int("n"), Field::int("m"), Field::int("cell").repeat("n * m")],
    output: &[Field::int("safe")],
    constraints: &[
        "3 <= n, m <= 8",
        "cell is 0 (empty), 1 (wall) or 2 (virus)",
        "2 <= viruses <= 10, at least 3 empty cells",
    ],
    samples: &[
        Sample {
            input: "7 7\n2 0 0 0 1 1 0\n0 0 1 0 1 2 0\n0 1 1 0 1 0 0\n0 1 0 0 0 0 0\n0 0 0 0 0 1 1\n0 1 0 0 0 0 0\n0 1 0 0 0 0 0\n",
            output: "27\n",
        },
        Sample {
            input: "4 6\n0 0 0 0 0 0\n1 0 0 0 0 2\n1 1 1 0 0 2\n0 0 0 0 0 2\n",
            output: "9\n",
        },
    ],
};

const EMPTY: u8 = 0;
const WALL: u8 = 1;
const VIRUS: u8 = 2;

/// Empty cells left once the virus has spread as far as it can.
fn safe_area(lab: &Grid<u8>) -> usize {
    let mut infected = lab.clone();
    let mut queue: VecDeque<_> = lab.positions().filter(|&p| lab[p] == VIRUS).collect();
    while let Some(p) = queue.pop_front() {
        for q in lab.neighbours4(p.0, p.1) {
            if infected[q] == EMPTY {
                infected[q] = VIRUS;
                queue.push_back(q);
            }
        }
    }
    infected.iter().filter(|&&c| c == EMPTY).count()
}

impl Template for Laboratory {
    type Input = Grid<u8>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Grid<u8>, InputError> {
        let n = sc.next_in("n", 3..=8usize)?;
        let m = sc.next_in("m", 3..=8usize)?;
        let lab = sc.grid_in("cell", n, m, EMPTY..=VIRUS)?;
        let viruses = lab.iter().filter(|&&c| c == VIRUS).count();
        if !(2..=10).contains(&viruses) {
            return Err(InputError::constraint("cell", format!("{viruses} viruses, expected 2 to 10")));
        }
        if lab.iter().filter(|&&c| c == EMPTY).count() < 3 {
            return Err(InputError::constraint("cell", "fewer than 3 empty cells"));
        }
        Ok(lab)
    }

    fn solve(&self, lab: &Grid<u8>) -> usize {
        let empty: Vec<_> = lab.positions().filter(|&p| lab[p] == EMPTY).collect();
        let mut walled = lab.clone();
        let mut best = 0;
        for (i, &a) in empty.iter().enumerate() {
            for (j, &b) in empty.iter().enumerate().skip(i + 1) {
                for &c in &empty[j + 1..] {
                    for p in [a, b, c] {
                        walled[p] = WALL;
                    }
                    best = best.max(safe_area(&walled));
                    for p in [a, b, c] {
                        walled[p] = EMPTY;
                    }
                }
            }
        }
        best
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_stops_at_walls() {
        let lab = Grid::from_rows(vec![vec![2, 1, 0], vec![1, 0, 0], vec![0, 0, 2]]).unwrap();
        assert_eq!(safe_area(&lab), 0);
        let sealed = Grid::from_rows(vec![vec![2, 1, 0], vec![1, 1, 0], vec![0, 1, 2]]).unwrap();
        assert_eq!(safe_area(&sealed), 1);
    }
}
