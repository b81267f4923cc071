//! Check that a duty roster is fair: the hours of the busiest and idlest
//! worker differ by at most 12.

use std::collections::HashMap;

use crate::templates::prelude::*;

pub struct DutyBalance;

static INFO: TemplateInfo = TemplateInfo {
    id: "25584",
    title: "Puang in duty hell (Large)",
    category: Category::Sorting,
    input: &[Field::int("n"), Field::word("slot").repeat("28 * n")],
    output: &[Field::word("fair")],
    constraints: &[
        "1 <= n <= 1000",
        "each week is four shift rows of seven names, `-` for an empty slot",
        "shifts last 4, 6, 4 and 10 hours",
        "names have at most 20 characters",
    ],
    samples: &[
        Sample {
            input: "1\nA - - - - - -\nA - - - - - -\nA - - - - - B\n- - - - - - -\n",
            output: "Yes\n",
        },
        Sample {
            input: "1\nA - - - - - -\n- - - - - - -\nB - - - - - -\nB B - - - - -\n",
            output: "No\n",
        },
    ],
};

const SHIFT_HOURS: [u32; 4] = [4, 6, 4, 10];

impl Template for DutyBalance {
    /// Total hours per worker.
    type Input = Vec<u32>;
    type Output = bool;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u32>, InputError> {
        let weeks = sc.next_in("n", 1..=1000usize)?;
        let mut hours: HashMap<&str, u32> = HashMap::new();
        for _ in 0..weeks {
            for shift in SHIFT_HOURS {
                for _ in 0..7 {
                    let name = sc.token("slot")?;
                    if name.len() > 20 {
                        return Err(InputError::constraint("slot", "name longer than 20 characters"));
                    }
                    if name != "-" {
                        *hours.entry(name).or_default() += shift;
                    }
                }
            }
        }
        Ok(hours.into_values().collect())
    }

    fn solve(&self, hours: &Vec<u32>) -> bool {
        match (hours.iter().min(), hours.iter().max()) {
            (Some(lo), Some(hi)) => hi - lo <= 12,
            _ => true,
        }
    }

    fn render(&self, output: &bool, out: &mut String) {
        push_line(out, [if *output { "Yes" } else { "No" }]);
    }
}
