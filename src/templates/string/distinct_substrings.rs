//! Number of distinct non-empty substrings.
//!
//! Every substring is a prefix of some suffix. Sorting the suffixes puts
//! shared prefixes next to each other, so the count is the total number of
//! prefixes minus the longest common prefix of each adjacent pair.

use crate::templates::prelude::*;

pub struct DistinctSubstrings;

static INFO: TemplateInfo = TemplateInfo {
    id: "11478",
    title: "Number of distinct substrings",
    category: Category::String,
    input: &[Field::word("s")],
    output: &[Field::int("count")],
    constraints: &["1 <= |s| <= 1000", "s is lowercase"],
    samples: &[Sample {
        input: "ababc\n",
        output: "12\n",
    }],
};

fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl Template for DistinctSubstrings {
    type Input = String;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<String, InputError> {
        let s = sc.word_of("s", |b| b.is_ascii_lowercase())?;
        if s.len() > 1000 {
            return Err(InputError::constraint("s", "longer than 1000 characters"));
        }
        Ok(s.to_string())
    }

    fn solve(&self, s: &String) -> usize {
        let s = s.as_bytes();
        let n = s.len();
        let mut suffixes: Vec<&[u8]> = (0..n).map(|i| &s[i..]).collect();
        suffixes.sort_unstable();
        let shared: usize = suffixes.windows(2).map(|w| common_prefix(w[0], w[1])).sum();
        n * (n + 1) / 2 - shared
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn agrees_with_enumeration() {
        for s in ["a", "aaaa", "abcabc", "banana", "mississippi"] {
            let n = s.len();
            let all: HashSet<&str> = (0..n).flat_map(|i| (i + 1..=n).map(move |j| &s[i..j])).collect();
            assert_eq!(DistinctSubstrings.solve(&s.to_string()), all.len(), "{s}");
        }
    }
}
