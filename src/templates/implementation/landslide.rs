//! First rainfall after which a floor of a storage tower overflows.
//!
//! Rain `i` soaks floors `1..=t_i`, so floor 1 receives every rainfall and is
//! always the first to exceed the capacity.

use crate::templates::prelude::*;

pub struct Landslide;

static INFO: TemplateInfo = TemplateInfo {
    id: "27940",
    title: "Eggplant landslide",
    category: Category::Implementation,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("k"),
        Field::int("rain").repeat("2 * m"),
    ],
    output: &[Field::int("when").until_end()],
    constraints: &[
        "1 <= n <= 100000",
        "1 <= m <= 1000000",
        "1 <= k <= 1000000000",
        "rain is `t r` with 1 <= t <= n and 1 <= r <= k",
        "prints `i floor` for the first overflow or -1",
    ],
    samples: &[
        Sample {
            input: "3 4 10\n1 3\n2 5\n1 2\n3 4\n",
            output: "4 1\n",
        },
        Sample {
            input: "3 2 10\n1 3\n2 5\n",
            output: "-1\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub capacity: u64,
    pub rain: Vec<u64>,
}

impl Template for Landslide {
    type Input = Input;
    /// `(rainfall index, floor)`, both 1-based.
    type Output = Option<(usize, usize)>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let m = sc.next_in("m", 1..=1_000_000usize)?;
        let capacity = sc.next_in("k", 1..=1_000_000_000u64)?;
        let rain = (0..m)
            .map(|_| {
                sc.next_in("rain", 1..=n)?;
                sc.next_in("rain", 1..=capacity)
            })
            .collect::<Result<_, InputError>>()?;
        Ok(Input { capacity, rain })
    }

    fn solve(&self, input: &Input) -> Option<(usize, usize)> {
        let mut soaked = 0;
        let overflow = input.rain.iter().position(|&r| {
            soaked += r;
            soaked > input.capacity
        });
        overflow.map(|i| (i + 1, 1))
    }

    fn render(&self, output: &Option<(usize, usize)>, out: &mut String) {
        match output {
            Some((i, floor)) => push_line(out, [i, floor]),
            None => push_line(out, ["-1"]),
        }
    }
}
