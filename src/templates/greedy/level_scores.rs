//! Total score decrease needed so level scores are strictly increasing,
//! only ever lowering scores.

use crate::templates::prelude::*;

pub struct LevelScores;

static INFO: TemplateInfo = TemplateInfo {
    id: "2847",
    title: "Dongjun made a game",
    category: Category::Greedy,
    input: &[Field::int("n"), Field::int("score").repeat("n")],
    output: &[Field::int("decrease")],
    constraints: &["1 <= n <= 100", "1 <= score <= 20000"],
    samples: &[
        Sample {
            input: "4\n5\n5\n5\n5\n",
            output: "6\n",
        },
        Sample {
            input: "3\n5\n3\n7\n",
            output: "3\n",
        },
    ],
};

impl Template for LevelScores {
    type Input = Vec<i64>;
    type Output = i64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<i64>, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        sc.values_in("score", n, 1..=20_000)
    }

    fn solve(&self, scores: &Vec<i64>) -> i64 {
        let mut total = 0;
        let mut cap = i64::MAX;
        // walk from the last level, which never changes
        for &s in scores.iter().rev() {
            let kept = s.min(cap);
            total += s - kept;
            cap = kept - 1;
        }
        total
    }

    fn render(&self, output: &i64, out: &mut String) {
        push_line(out, [output]);
    }
}
