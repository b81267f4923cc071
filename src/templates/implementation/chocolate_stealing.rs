//! Total chocolate eaten and days spent when, each day, the first box that
//! exceeds the box `k` places before it (in sorted order) is cut down to
//! match it.

use crate::templates::prelude::*;

pub struct ChocolateStealing;

static INFO: TemplateInfo = TemplateInfo {
    id: "23322",
    title: "Stealing chocolate",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("k"), Field::int("box").repeat("n")],
    output: &[Field::int("eaten"), Field::int("days")],
    constraints: &["1 <= k <= n <= 2000", "1 <= box <= 1000000000, given in non-decreasing order"],
    samples: &[
        Sample {
            input: "5 1\n1 2 2 3 3\n",
            output: "6 4\n",
        },
        Sample {
            input: "4 2\n1 1 5 5\n",
            output: "8 2\n",
        },
    ],
};

impl Template for ChocolateStealing {
    type Input = (Vec<u64>, usize);
    type Output = (u64, usize);

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(Vec<u64>, usize), InputError> {
        let n = sc.next_in("n", 1..=2000usize)?;
        let k = sc.next_in("k", 1..=n)?;
        let boxes: Vec<u64> = sc.values_in("box", n, 1..=1_000_000_000)?;
        if boxes.windows(2).any(|w| w[0] > w[1]) {
            return Err(InputError::constraint("box", "expected non-decreasing order"));
        }
        Ok((boxes, k))
    }

    fn solve(&self, (boxes, k): &(Vec<u64>, usize)) -> (u64, usize) {
        let k = *k;
        let mut boxes = boxes.clone();
        let (mut eaten, mut days) = (0, 0);
        while let Some(i) = (k..boxes.len()).find(|&i| boxes[i - k] < boxes[i]) {
            eaten += boxes[i] - boxes[i - k];
            days += 1;
            boxes[i] = boxes[i - k];
            boxes.sort_unstable();
        }
        (eaten, days)
    }

    fn render(&self, &(eaten, days): &(u64, usize), out: &mut String) {
        push_line(out, [eaten, days as u64]);
    }
}
