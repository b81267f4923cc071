//! GCD of two repunits (numbers written with only the digit 1).
//!
//! `gcd(R(a), R(b)) = R(gcd(a, b))`, so the answer is a run of `gcd(a, b)`
//! ones.

use crate::templates::prelude::*;
use crate::utils::gcd;

pub struct RepunitGcd;

static INFO: TemplateInfo = TemplateInfo {
    id: "1850",
    title: "Greatest common divisor",
    category: Category::Math,
    input: &[Field::int("a"), Field::int("b")],
    output: &[Field::word("gcd")],
    constraints: &[
        "a and b count the ones of each repunit, 1 <= a, b < 2^63",
        "gcd(a, b) <= 10000000",
    ],
    samples: &[
        Sample {
            input: "3 4\n",
            output: "1\n",
        },
        Sample {
            input: "3 6\n",
            output: "111\n",
        },
        Sample {
            input: "500000000000000000 500000000000000002\n",
            output: "11\n",
        },
    ],
};

const MAX_DIGITS: u64 = 10_000_000;

impl Template for RepunitGcd {
    /// Length of the answer.
    type Input = u64;
    type Output = String;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<u64, InputError> {
        let a = sc.next_in("a", 1..=i64::MAX as u64)?;
        let b = sc.next_in("b", 1..=i64::MAX as u64)?;
        let len = gcd(a, b);
        if len > MAX_DIGITS {
            return Err(InputError::constraint("b", format!("answer would have {len} digits")));
        }
        Ok(len)
    }

    fn solve(&self, &len: &u64) -> String {
        "1".repeat(len as usize)
    }

    fn render(&self, output: &String, out: &mut String) {
        push_line(out, [output]);
    }
}
