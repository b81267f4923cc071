//! Number of groups of words that are anagrams of each other.

use std::collections::HashSet;

use crate::templates::prelude::*;

pub struct AnagramGroups;

static INFO: TemplateInfo = TemplateInfo {
    id: "16499",
    title: "Grouping identical words",
    category: Category::String,
    input: &[Field::int("n"), Field::word("word").repeat("n")],
    output: &[Field::int("groups")],
    constraints: &["1 <= n <= 100", "words are lowercase, 1 to 10 letters"],
    samples: &[Sample {
        input: "5\ncat\nact\ntac\ndog\ngod\n",
        output: "2\n",
    }],
};

impl Template for AnagramGroups {
    type Input = Vec<String>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<String>, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        (0..n)
            .map(|_| {
                let w = sc.word_of("word", |b| b.is_ascii_lowercase())?;
                if w.len() > 10 {
                    return Err(InputError::constraint("word", "longer than 10 letters"));
                }
                Ok(w.to_string())
            })
            .collect()
    }

    fn solve(&self, words: &Vec<String>) -> usize {
        words
            .iter()
            .map(|w| {
                let mut letters = w.clone().into_bytes();
                letters.sort_unstable();
                letters
            })
            .collect::<HashSet<_>>()
            .len()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
