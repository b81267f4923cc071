//! Spread between the largest and smallest perimeter of the parallelograms
//! that can be completed from three points.

use crate::templates::prelude::*;

pub struct Parallelogram;

static INFO: TemplateInfo = TemplateInfo {
    id: "1064",
    title: "Parallelogram",
    category: Category::Math,
    input: &[Field::int("point").repeat("6")],
    output: &[Field::decimal("spread")],
    constraints: &[
        "points are `xa ya xb yb xc yc`",
        "-5000 <= coordinates <= 5000",
        "prints -1.0 when the points are collinear",
    ],
    samples: &[
        Sample {
            input: "0 0 4 0 0 3\n",
            output: "4.0000000000000\n",
        },
        Sample {
            input: "0 0 1 0 2 0\n",
            output: "-1.0\n",
        },
        Sample {
            input: "3 1 1 5 3 0\n",
            output: "8.7703296142690\n",
        },
    ],
};

type Point = (i64, i64);

fn dist(p: Point, q: Point) -> f64 {
    ((p.0 - q.0) as f64).hypot((p.1 - q.1) as f64)
}

impl Template for Parallelogram {
    type Input = [Point; 3];
    type Output = Option<f64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<[Point; 3], InputError> {
        let mut pts = [(0, 0); 3];
        for p in &mut pts {
            *p = (sc.next_in("point", -5000..=5000)?, sc.next_in("point", -5000..=5000)?);
        }
        Ok(pts)
    }

    fn solve(&self, &[a, b, c]: &[Point; 3]) -> Option<f64> {
        let cross = (b.0 - a.0) * (c.1 - a.1) - (c.0 - a.0) * (b.1 - a.1);
        if cross == 0 {
            return None;
        }
        // the fourth vertex sits opposite each of the three points in turn
        let perimeters = [
            2.0 * (dist(a, b) + dist(a, c)),
            2.0 * (dist(b, a) + dist(b, c)),
            2.0 * (dist(c, a) + dist(c, b)),
        ];
        let max = perimeters.iter().copied().fold(f64::MIN, f64::max);
        let min = perimeters.iter().copied().fold(f64::MAX, f64::min);
        Some(max - min)
    }

    fn render(&self, output: &Option<f64>, out: &mut String) {
        match output {
            Some(spread) => push_line(out, [format!("{spread:.13}")]),
            None => push_line(out, ["-1.0"]),
        }
    }
}
