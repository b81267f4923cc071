//! Cells of a 100×100 picture hidden under more than `m` sheets.

use crate::templates::prelude::*;

pub struct Transparency;

static INFO: TemplateInfo = TemplateInfo {
    id: "1531",
    title: "Transparent",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("m"), Field::int("sheet").repeat("4 * n")],
    output: &[Field::int("hidden")],
    constraints: &["1 <= n <= 50", "0 <= m <= 50", "sheet is `x1 y1 x2 y2` with 1 <= x1 <= x2 <= 100, 1 <= y1 <= y2 <= 100"],
    samples: &[Sample {
        input: "3 1\n21 21 80 80\n41 41 60 60\n71 71 90 90\n",
        output: "500\n",
    }],
};

const SIDE: usize = 100;

#[derive(Debug, Clone)]
pub struct Input {
    pub m: u32,
    pub sheets: Vec<[usize; 4]>,
}

impl Template for Transparency {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        let m = sc.next_in("m", 0..=50)?;
        let sheets = (0..n)
            .map(|_| {
                let x1 = sc.next_in("sheet", 1..=SIDE)?;
                let y1 = sc.next_in("sheet", 1..=SIDE)?;
                let x2 = sc.next_in("sheet", x1..=SIDE)?;
                let y2 = sc.next_in("sheet", y1..=SIDE)?;
                Ok([x1 - 1, y1 - 1, x2 - 1, y2 - 1])
            })
            .collect::<Result<_, InputError>>()?;
        Ok(Input { m, sheets })
    }

    fn solve(&self, input: &Input) -> usize {
        let mut layers = Grid::new(SIDE, SIDE, 0u32);
        for &[x1, y1, x2, y2] in &input.sheets {
            for x in x1..=x2 {
                for y in y1..=y2 {
                    layers[(x, y)] += 1;
                }
            }
        }
        layers.iter().filter(|&&l| l > input.m).count()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
