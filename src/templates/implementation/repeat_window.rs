//! Longest contiguous run in which no value appears more than `k` times.

use crate::templates::prelude::*;

pub struct RepeatWindow;

static INFO: TemplateInfo = TemplateInfo {
    id: "20922",
    title: "No overlaps",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("k"), Field::int("a").repeat("n")],
    output: &[Field::int("length")],
    constraints: &["1 <= n <= 200000", "1 <= k <= 100", "1 <= a <= 100000"],
    samples: &[Sample {
        input: "9 2\n3 2 5 5 6 4 4 5 7\n",
        output: "7\n",
    }],
};

const MAX_VALUE: usize = 100_000;

impl Template for RepeatWindow {
    type Input = (Vec<usize>, usize);
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(Vec<usize>, usize), InputError> {
        let n = sc.next_in("n", 1..=200_000usize)?;
        let k = sc.next_in("k", 1..=100usize)?;
        Ok((sc.values_in("a", n, 1..=MAX_VALUE)?, k))
    }

    fn solve(&self, (a, k): &(Vec<usize>, usize)) -> usize {
        let mut count = vec![0usize; MAX_VALUE + 1];
        let (mut hi, mut best) = (0, 0);
        // window is a[lo..hi]
        for lo in 0..a.len() {
            while hi < a.len() && count[a[hi]] < *k {
                count[a[hi]] += 1;
                hi += 1;
            }
            best = best.max(hi - lo);
            count[a[lo]] -= 1;
        }
        best
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
