//! Reconstruct a wheel of fortune from the letters seen after each spin.
//!
//! Prints the wheel clockwise from the final pointer position, `?` for
//! unknown slots, or `!` if the observations contradict each other.

use crate::templates::prelude::*;

pub struct WheelOfFortune;

static INFO: TemplateInfo = TemplateInfo {
    id: "2840",
    title: "Wheel of fortune",
    category: Category::Implementation,
    input: &[
        Field::int("n"),
        Field::int("k"),
        Field::word("spin").repeat("2 * k"),
    ],
    output: &[Field::word("wheel")],
    constraints: &[
        "2 <= n <= 25",
        "1 <= k <= 100",
        "spin is `s c`: the pointer advanced s slots (1 <= s <= 100) and landed on uppercase letter c",
    ],
    samples: &[
        Sample {
            input: "8 8\n4 V\n3 I\n7 T\n7 A\n6 R\n5 N\n1 O\n9 H\n",
            output: "HONITAVR\n",
        },
        Sample {
            input: "5 6\n1 A\n2 B\n5 B\n1 C\n2 A\n2 B\n",
            output: "B?A?C\n",
        },
        Sample {
            input: "3 2\n1 A\n1 A\n",
            output: "!\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub slots: usize,
    pub spins: Vec<(usize, u8)>,
}

impl Template for WheelOfFortune {
    type Input = Input;
    type Output = Option<String>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let slots = sc.next_in("n", 2..=25usize)?;
        let k = sc.next_in("k", 1..=100usize)?;
        let spins = (0..k)
            .map(|_| {
                let steps = sc.next_in("spin", 1..=100usize)?;
                let letter = sc.word_of_len("spin", 1)?.as_bytes()[0];
                if !letter.is_ascii_uppercase() {
                    return Err(InputError::constraint("spin", "expected an uppercase letter"));
                }
                Ok((steps, letter))
            })
            .collect::<Result<_, _>>()?;
        Ok(Input { slots, spins })
    }

    fn solve(&self, input: &Input) -> Option<String> {
        let n = input.slots;
        let mut wheel: Vec<Option<u8>> = vec![None; n];
        let mut at = 0;
        for &(steps, letter) in &input.spins {
            at = (at + steps) % n;
            match wheel[at] {
                None => wheel[at] = Some(letter),
                Some(seen) if seen != letter => return None,
                Some(_) => {}
            }
        }
        let mut letters: Vec<u8> = wheel.iter().flatten().copied().collect();
        letters.sort_unstable();
        if letters.windows(2).any(|w| w[0] == w[1]) {
            return None;
        }
        // read clockwise, i.e. backwards through the slots, from the pointer
        Some(
            (0..n)
                .map(|i| wheel[(at + n - i) % n].map_or('?', char::from))
                .collect(),
        )
    }

    fn render(&self, output: &Option<String>, out: &mut String) {
        push_line(out, [output.as_deref().unwrap_or("!")]);
    }
}
