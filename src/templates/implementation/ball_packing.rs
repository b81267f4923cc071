//! Fewest boxes for red, green and blue balls, where a box holds three of
//! one colour or one of each (or fewer).

use crate::templates::prelude::*;

pub struct BallPacking;

static INFO: TemplateInfo = TemplateInfo {
    id: "12981",
    title: "Ball packing",
    category: Category::Implementation,
    input: &[Field::int("r"), Field::int("g"), Field::int("b")],
    output: &[Field::int("boxes")],
    constraints: &["0 <= r, g, b <= 1000000000"],
    samples: &[
        Sample {
            input: "4 4 4\n",
            output: "4\n",
        },
        Sample {
            input: "1 1 0\n",
            output: "1\n",
        },
        Sample {
            input: "5 0 2\n",
            output: "3\n",
        },
    ],
};

impl Template for BallPacking {
    type Input = [u64; 3];
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<[u64; 3], InputError> {
        Ok([
            sc.next_in("r", 0..=1_000_000_000)?,
            sc.next_in("g", 0..=1_000_000_000)?,
            sc.next_in("b", 0..=1_000_000_000)?,
        ])
    }

    fn solve(&self, balls: &[u64; 3]) -> u64 {
        let mixed = balls.iter().copied().min().unwrap_or(0);
        let mut left = balls.map(|c| c - mixed);
        let mut boxes = mixed + left.iter().map(|c| c / 3).sum::<u64>();
        left.iter_mut().for_each(|c| *c %= 3);
        // two colours with one ball each share a box
        for (i, j) in [(0, 2), (0, 1), (2, 1)] {
            if left[i] == 1 && left[j] == 1 {
                left[i] = 0;
                left[j] = 0;
                boxes += 1;
            }
        }
        boxes + left.iter().filter(|&&c| c > 0).count() as u64
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}
