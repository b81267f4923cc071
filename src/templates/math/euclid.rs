//! Euclid's construction: slide `C` along line `AC` so that parallelogram
//! `ABHG` (with `AG` along `AC`) has the same area as triangle `DEF`, then
//! print `H` and `G`.

use crate::templates::prelude::*;

pub struct Euclid;

static INFO: TemplateInfo = TemplateInfo {
    id: "4105",
    title: "Euclid",
    category: Category::Math,
    input: &[Field::decimal("point").repeat("12").until("0 0 0 0 0 0 0 0 0 0 0 0")],
    output: &[Field::line("hg").until_end()],
    constraints: &[
        "each case is `xa ya xb yb xc yc xd yd xe ye xf yf`",
        "A, B, C are not collinear; D, E, F form a triangle",
        "input ends with a line of twelve zeros",
    ],
    samples: &[Sample {
        input: "0 0 5 0 0 5 3 2 7 2 0 4\n1 1 3 1 1 3 0 0 2 0 0 2\n0 0 0 0 0 0 0 0 0 0 0 0\n",
        output: "5.000 0.800 0.000 0.800\n3.000 2.000 1.000 2.000\n",
    }],
};

type Point = (f64, f64);

/// Twice the signed area of triangle `pqr`.
fn cross(p: Point, q: Point, r: Point) -> f64 {
    (q.0 - p.0) * (r.1 - p.1) - (r.0 - p.0) * (q.1 - p.1)
}

impl Template for Euclid {
    type Input = Vec<[Point; 6]>;
    /// `(H, G)` per case.
    type Output = Vec<(Point, Point)>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<[Point; 6]>, InputError> {
        let mut cases = Vec::new();
        loop {
            let mut pts = [(0.0, 0.0); 6];
            for p in &mut pts {
                *p = (sc.next::<f64>("point")?, sc.next::<f64>("point")?);
                if !p.0.is_finite() || !p.1.is_finite() {
                    return Err(InputError::constraint("point", "coordinates must be finite"));
                }
            }
            if pts.iter().all(|&(x, y)| x == 0.0 && y == 0.0) {
                return Ok(cases);
            }
            if cross(pts[0], pts[1], pts[2]) == 0.0 {
                return Err(InputError::constraint("point", "A, B and C are collinear"));
            }
            cases.push(pts);
        }
    }

    fn solve(&self, cases: &Vec<[Point; 6]>) -> Vec<(Point, Point)> {
        cases
            .iter()
            .map(|&[a, b, c, d, e, f]| {
                let triangle = cross(d, e, f).abs() / 2.0;
                let rate = triangle / cross(a, b, c).abs();
                let v = ((c.0 - a.0) * rate, (c.1 - a.1) * rate);
                ((b.0 + v.0, b.1 + v.1), (a.0 + v.0, a.1 + v.1))
            })
            .collect()
    }

    fn render(&self, output: &Vec<(Point, Point)>, out: &mut String) {
        for (h, g) in output {
            push_line(out, [h.0, h.1, g.0, g.1].map(|v| format!("{v:.3}")));
        }
    }
}
