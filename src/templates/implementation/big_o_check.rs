//! Whether `f(n) = a1*n + a0` satisfies `f(n) <= c*n` for every `n >= n0`.

use crate::templates::prelude::*;

pub struct BigOCheck;

static INFO: TemplateInfo = TemplateInfo {
    id: "24313",
    title: "Asymptotic notation 1",
    category: Category::Implementation,
    input: &[Field::int("a1"), Field::int("a0"), Field::int("c"), Field::int("n0")],
    output: &[Field::int("holds")],
    constraints: &["-100 <= a1, a0 <= 100", "1 <= c, n0 <= 100"],
    samples: &[
        Sample {
            input: "7 7\n8\n1\n",
            output: "0\n",
        },
        Sample {
            input: "7 7\n8\n10\n",
            output: "1\n",
        },
    ],
};

impl Template for BigOCheck {
    type Input = [i32; 4];
    type Output = bool;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<[i32; 4], InputError> {
        Ok([
            sc.next_in("a1", -100..=100)?,
            sc.next_in("a0", -100..=100)?,
            sc.next_in("c", 1..=100)?,
            sc.next_in("n0", 1..=100)?,
        ])
    }

    fn solve(&self, &[a1, a0, c, n0]: &[i32; 4]) -> bool {
        // holds at n0 and the slope does not overtake c afterwards
        a1 * n0 + a0 <= c * n0 && a1 <= c
    }

    fn render(&self, output: &bool, out: &mut String) {
        push_line(out, [u8::from(*output)]);
    }
}
