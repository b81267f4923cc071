//! Gold, silver and bronze by score, with at most two medals per country.

use crate::templates::prelude::*;

pub struct OlympiadMedals;

static INFO: TemplateInfo = TemplateInfo {
    id: "2535",
    title: "Asian informatics olympiad",
    category: Category::Sorting,
    input: &[Field::int("n"), Field::int("entry").repeat("3 * n")],
    output: &[Field::line("medalist").repeat("3")],
    constraints: &[
        "3 <= n <= 100",
        "entry is `country student score`, 1 <= country, student <= 100, 0 <= score <= 1000",
        "scores are distinct",
    ],
    samples: &[Sample {
        input: "7\n1 1 230\n1 2 210\n1 3 205\n2 1 100\n2 2 150\n3 1 175\n3 2 190\n",
        output: "1 1\n1 2\n3 2\n",
    }],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub country: u32,
    pub student: u32,
    pub score: u32,
}

impl Template for OlympiadMedals {
    type Input = Vec<Entry>;
    type Output = Vec<Entry>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Entry>, InputError> {
        let n = sc.next_in("n", 3..=100usize)?;
        let entries: Vec<Entry> = (0..n)
            .map(|_| {
                Ok(Entry {
                    country: sc.next_in("entry", 1..=100)?,
                    student: sc.next_in("entry", 1..=100)?,
                    score: sc.next_in("entry", 0..=1000)?,
                })
            })
            .collect::<Result<_, InputError>>()?;
        let mut scores: Vec<u32> = entries.iter().map(|e| e.score).collect();
        scores.sort_unstable();
        if scores.windows(2).any(|w| w[0] == w[1]) {
            return Err(InputError::constraint("entry", "scores must be distinct"));
        }
        Ok(entries)
    }

    fn solve(&self, entries: &Vec<Entry>) -> Vec<Entry> {
        let mut ranked = entries.clone();
        ranked.sort_unstable_by(|a, b| b.score.cmp(&a.score));
        let mut medals = [0u8; 101];
        ranked
            .into_iter()
            .filter(|e| {
                let won = &mut medals[e.country as usize];
                *won += 1;
                *won <= 2
            })
            .take(3)
            .collect()
    }

    fn render(&self, output: &Vec<Entry>, out: &mut String) {
        for e in output {
            push_line(out, [e.country, e.student]);
        }
    }
}
