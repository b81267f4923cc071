//! Minimum of `sum a[i] * b[i]` when `a` may be reordered: pair ascending
//! `a` with descending `b`.

use crate::templates::prelude::*;

pub struct Treasure;

static INFO: TemplateInfo = TemplateInfo {
    id: "1026",
    title: "Treasure",
    category: Category::Greedy,
    input: &[Field::int("n"), Field::int("a").repeat("n"), Field::int("b").repeat("n")],
    output: &[Field::int("minimum")],
    constraints: &["1 <= n <= 50", "0 <= a, b <= 100"],
    samples: &[
        Sample {
            input: "5\n1 1 1 6 0\n2 7 8 3 1\n",
            output: "18\n",
        },
        Sample {
            input: "3\n1 1 3\n10 30 20\n",
            output: "80\n",
        },
    ],
};

impl Template for Treasure {
    type Input = (Vec<u32>, Vec<u32>);
    type Output = u32;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(Vec<u32>, Vec<u32>), InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        let a = sc.values_in("a", n, 0..=100)?;
        let b = sc.values_in("b", n, 0..=100)?;
        Ok((a, b))
    }

    fn solve(&self, (a, b): &(Vec<u32>, Vec<u32>)) -> u32 {
        let mut a = a.clone();
        let mut b = b.clone();
        a.sort_unstable();
        b.sort_unstable_by(|x, y| y.cmp(x));
        a.iter().zip(&b).map(|(x, y)| x * y).sum()
    }

    fn render(&self, output: &u32, out: &mut String) {
        push_line(out, [output]);
    }
}
