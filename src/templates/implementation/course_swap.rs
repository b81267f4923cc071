//! Students who cannot get their wanted course by swapping with someone
//! who holds it.

use std::collections::HashMap;

use crate::templates::prelude::*;

pub struct CourseSwap;

static INFO: TemplateInfo = TemplateInfo {
    id: "23305",
    title: "Course change",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::int("held").repeat("n"), Field::int("wanted").repeat("n")],
    output: &[Field::int("unmatched")],
    constraints: &["1 <= n <= 1000000", "1 <= held, wanted <= 1000000"],
    samples: &[Sample {
        input: "3\n1 2 3\n3 2 4\n",
        output: "1\n",
    }],
};

impl Template for CourseSwap {
    type Input = (Vec<u32>, Vec<u32>);
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(Vec<u32>, Vec<u32>), InputError> {
        let n = sc.next_in("n", 1..=1_000_000usize)?;
        let held = sc.values_in("held", n, 1..=1_000_000)?;
        let wanted = sc.values_in("wanted", n, 1..=1_000_000)?;
        Ok((held, wanted))
    }

    fn solve(&self, (held, wanted): &(Vec<u32>, Vec<u32>)) -> usize {
        let mut available: HashMap<u32, usize> = HashMap::new();
        for &c in held {
            *available.entry(c).or_default() += 1;
        }
        wanted
            .iter()
            .filter(|&c| match available.get_mut(c) {
                Some(left) if *left > 0 => {
                    *left -= 1;
                    false
                }
                _ => true,
            })
            .count()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
