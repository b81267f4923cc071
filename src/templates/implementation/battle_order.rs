//! Score a guessed ordering of battles: the number of pairs placed in the
//! correct relative order, out of all pairs.

use std::collections::HashMap;

use crate::templates::prelude::*;

pub struct BattleOrder;

static INFO: TemplateInfo = TemplateInfo {
    id: "3077",
    title: "Imjin war",
    category: Category::Implementation,
    input: &[
        Field::int("n"),
        Field::word("battle").repeat("n"),
        Field::word("guess").repeat("n"),
    ],
    output: &[Field::word("score")],
    constraints: &["2 <= n <= 2500", "guess is a permutation of the battles"],
    samples: &[Sample {
        input: "3\nalpha beta gamma\nbeta gamma alpha\n",
        output: "1/3\n",
    }],
};

impl Template for BattleOrder {
    /// Real position of each guessed battle, in guess order.
    type Input = Vec<usize>;
    type Output = (usize, usize);

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<usize>, InputError> {
        let n = sc.next_in("n", 2..=2500usize)?;
        let mut position = HashMap::with_capacity(n);
        for i in 0..n {
            if position.insert(sc.token("battle")?, i).is_some() {
                return Err(InputError::constraint("battle", "battle names repeat"));
            }
        }
        let mut used = vec![false; n];
        (0..n)
            .map(|_| {
                let name = sc.token("guess")?;
                match position.get(name) {
                    Some(&p) if !std::mem::replace(&mut used[p], true) => Ok(p),
                    _ => Err(InputError::constraint("guess", format!("{name:?} is unknown or repeated"))),
                }
            })
            .collect()
    }

    fn solve(&self, order: &Vec<usize>) -> (usize, usize) {
        let n = order.len();
        let correct = (0..n)
            .map(|i| order[i + 1..].iter().filter(|&&later| order[i] < later).count())
            .sum();
        (correct, n * (n - 1) / 2)
    }

    fn render(&self, &(correct, total): &(usize, usize), out: &mut String) {
        push_line(out, [format!("{correct}/{total}")]);
    }
}
