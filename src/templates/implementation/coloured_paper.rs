//! Area covered by 10×10 sheets on a 100×100 board.

use crate::templates::prelude::*;

pub struct ColouredPaper;

static INFO: TemplateInfo = TemplateInfo {
    id: "2563",
    title: "Coloured paper",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("corner").repeat("2 * n")],
    output: &[Field::int("area")],
    constraints: &["1 <= n <= 100", "corner is `x y` with 1 <= x, y <= 90"],
    samples: &[Sample {
        input: "3\n3 7\n15 7\n5 2\n",
        output: "260\n",
    }],
};

const BOARD: usize = 100;
const SHEET: usize = 10;

impl Template for ColouredPaper {
    type Input = Vec<(usize, usize)>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<(usize, usize)>, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        (0..n)
            .map(|_| {
                let x = sc.next_in("corner", 1..=BOARD - SHEET)?;
                let y = sc.next_in("corner", 1..=BOARD - SHEET)?;
                Ok((x, y))
            })
            .collect()
    }

    fn solve(&self, corners: &Vec<(usize, usize)>) -> usize {
        let mut board = Grid::new(BOARD + 1, BOARD + 1, false);
        for &(x, y) in corners {
            for i in x..x + SHEET {
                for j in y..y + SHEET {
                    board[(i, j)] = true;
                }
            }
        }
        board.iter().filter(|&&c| c).count()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
