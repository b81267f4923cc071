//! Seat passengers one at a time in the car with the fewest passengers
//! sharing their initial, then the fewest passengers overall, then the
//! lowest number. Full cars are skipped and a passenger who fits nowhere
//! stays on the platform.

use crate::templates::prelude::*;

pub struct TrainSeating;

static INFO: TemplateInfo = TemplateInfo {
    id: "8978",
    title: "VLAK",
    category: Category::Sorting,
    input: &[
        Field::int("n"),
        Field::int("k"),
        Field::int("p"),
        Field::word("name").repeat("p"),
    ],
    output: &[Field::int("seated").repeat("n")],
    constraints: &[
        "1 <= n <= 10",
        "1 <= k <= 100",
        "1 <= p <= 1000",
        "names are lowercase, at most 20 letters",
    ],
    samples: &[
        Sample {
            input: "3 2 5\nana\nbob\nabe\nann\nbea\n",
            output: "2 2 1\n",
        },
        Sample {
            input: "2 4 6\nmarko\nmirko\nmate\nana\nivan\nmaja\n",
            output: "3 3\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub cars: usize,
    pub capacity: usize,
    /// Initial letter of each passenger, in arrival order.
    pub initials: Vec<u8>,
}

impl Template for TrainSeating {
    type Input = Input;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let cars = sc.next_in("n", 1..=10usize)?;
        let capacity = sc.next_in("k", 1..=100usize)?;
        let p = sc.next_in("p", 1..=1000usize)?;
        let initials = (0..p)
            .map(|_| {
                let name = sc.word_of("name", |b| b.is_ascii_lowercase())?;
                if name.len() > 20 {
                    return Err(InputError::constraint("name", "longer than 20 letters"));
                }
                Ok(name.as_bytes()[0])
            })
            .collect::<Result<_, _>>()?;
        Ok(Input {
            cars,
            capacity,
            initials,
        })
    }

    fn solve(&self, input: &Input) -> Vec<usize> {
        // per car: count of passengers by initial
        let mut cars = vec![[0usize; 26]; input.cars];
        let mut seated = vec![0usize; input.cars];
        for &initial in &input.initials {
            let letter = usize::from(initial - b'a');
            let best = (0..input.cars)
                .filter(|&c| seated[c] < input.capacity)
                .min_by_key(|&c| (cars[c][letter], seated[c], c));
            if let Some(c) = best {
                cars[c][letter] += 1;
                seated[c] += 1;
            }
        }
        seated
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        push_line(out, output);
    }
}
