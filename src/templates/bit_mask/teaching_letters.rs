//! Choose `k` letters to teach so that the most words become readable.
//!
//! Every word needs `a`, `c`, `i`, `n` and `t`, so those five are always
//! taught and the search enumerates the remaining `k - 5` letters as bit
//! masks over the alphabet.

use crate::templates::prelude::*;

pub struct TeachingLetters;

static INFO: TemplateInfo = TemplateInfo {
    id: "1062",
    title: "Teaching",
    category: Category::BitMask,
    input: &[Field::int("n"), Field::int("k"), Field::word("word").repeat("n")],
    output: &[Field::int("readable")],
    constraints: &[
        "1 <= n <= 50",
        "0 <= k <= 26",
        "words are 1 to 15 lowercase letters",
    ],
    samples: &[
        Sample {
            input: "3 6\nantarctica\nantahellotica\nantacartica\n",
            output: "2\n",
        },
        Sample {
            input: "2 3\nantaxxxxxxxtica\nantarctica\n",
            output: "0\n",
        },
        Sample {
            input: "9 8\nantabtica\nantaxtica\nantadtica\nantaetica\nantaftica\nantagtica\nantahtica\nantajtica\nantaktica\n",
            output: "3\n",
        },
    ],
};

const ALPHABET: u32 = 26;

fn letter_mask(s: &str) -> u32 {
    s.bytes().fold(0, |m, b| m | 1 << (b - b'a'))
}

#[derive(Debug, Clone)]
pub struct Input {
    pub k: u32,
    /// Letter set of each word.
    pub words: Vec<u32>,
}

fn best(words: &[u32], taught: u32, from: u32, left: u32) -> usize {
    if left == 0 {
        return words.iter().filter(|&&w| w & !taught == 0).count();
    }
    let mut answer = 0;
    for letter in from..ALPHABET {
        if taught & (1 << letter) != 0 {
            continue;
        }
        answer = answer.max(best(words, taught | 1 << letter, letter + 1, left - 1));
    }
    answer
}

impl Template for TeachingLetters {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=50usize)?;
        let k = sc.next_in("k", 0..=ALPHABET)?;
        let mut words = Vec::with_capacity(n);
        for _ in 0..n {
            let w = sc.word_of("word", |b| b.is_ascii_lowercase())?;
            if w.len() > 15 {
                return Err(InputError::constraint("word", "longer than 15 letters"));
            }
            words.push(letter_mask(w));
        }
        Ok(Input { k, words })
    }

    fn solve(&self, input: &Input) -> usize {
        let required = letter_mask("antic");
        if input.k < required.count_ones() {
            return 0;
        }
        best(&input.words, required, 0, input.k - required.count_ones())
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_alphabet_reads_everything() {
        let input = Input {
            k: 26,
            words: vec![letter_mask("antazzztica"), letter_mask("antaqtica")],
        };
        assert_eq!(TeachingLetters.solve(&input), 2);
    }
}
