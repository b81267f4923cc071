//! Whether a word splits into chemical element symbols.
//!
//! Positions in the word are graph nodes; a symbol of length one or two
//! starting at a position is an edge to the position after it.

use std::collections::HashSet;

use crate::templates::prelude::*;

pub struct ElementSpelling;

static INFO: TemplateInfo = TemplateInfo {
    id: "3407",
    title: "Oath",
    category: Category::GraphTraversal,
    input: &[Field::int("t"), Field::word("word").repeat("t")],
    output: &[Field::word("verdict").repeat("t")],
    constraints: &["1 <= t <= 100", "word is 1 to 50000 lowercase letters"],
    samples: &[Sample {
        input: "4\nceo\nlabor\ngoe\nbjeks\n",
        output: "YES\nNO\nNO\nNO\n",
    }],
};

static SYMBOLS: [&str; 114] = [
    "h", "he", "li", "be", "b", "c", "n", "o", "f", "ne", "na", "mg", "al", "si", "p", "s", "cl",
    "ar", "k", "ca", "sc", "ti", "v", "cr", "mn", "fe", "co", "ni", "cu", "zn", "ga", "ge", "as",
    "se", "br", "kr", "rb", "sr", "y", "zr", "nb", "mo", "tc", "ru", "rh", "pd", "ag", "cd", "in",
    "sn", "sb", "te", "i", "xe", "cs", "ba", "la", "ce", "pr", "nd", "pm", "sm", "eu", "gd", "tb",
    "dy", "ho", "er", "tm", "yb", "lu", "hf", "ta", "w", "re", "os", "ir", "pt", "au", "hg", "tl",
    "pb", "bi", "po", "at", "rn", "fr", "ra", "ac", "th", "pa", "u", "np", "pu", "am", "cm", "bk",
    "cf", "es", "fm", "md", "no", "lr", "rf", "db", "sg", "bh", "hs", "mt", "ds", "rg", "cn", "fl",
    "lv",
];

fn spellable(word: &[u8], symbols: &HashSet<&[u8]>) -> bool {
    let mut reach = vec![false; word.len() + 1];
    reach[0] = true;
    for i in 0..word.len() {
        if !reach[i] {
            continue;
        }
        for len in 1..=2 {
            if let Some(part) = word.get(i..i + len) {
                if symbols.contains(part) {
                    reach[i + len] = true;
                }
            }
        }
    }
    reach[word.len()]
}

impl Template for ElementSpelling {
    type Input = Vec<String>;
    type Output = Vec<bool>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<String>, InputError> {
        let t = sc.next_in("t", 1..=100usize)?;
        (0..t)
            .map(|_| {
                let w = sc.word_of("word", |b| b.is_ascii_lowercase())?;
                if w.len() > 50_000 {
                    return Err(InputError::constraint("word", "longer than 50000 letters"));
                }
                Ok(w.to_string())
            })
            .collect()
    }

    fn solve(&self, words: &Vec<String>) -> Vec<bool> {
        let symbols: HashSet<&[u8]> = SYMBOLS.iter().map(|s| s.as_bytes()).collect();
        words.iter().map(|w| spellable(w.as_bytes(), &symbols)).collect()
    }

    fn render(&self, output: &Vec<bool>, out: &mut String) {
        for &ok in output {
            push_line(out, [if ok { "YES" } else { "NO" }]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_two_letter_symbols() {
        let words = vec!["hehe".to_string(), "cono".to_string(), "q".to_string()];
        assert_eq!(ElementSpelling.solve(&words), vec![true, true, false]);
    }
}
