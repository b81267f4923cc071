//! Shorten a long sentence by replacing its middle with dots.
//!
//! Strings of at most 25 characters are kept. Otherwise the first 11 and
//! last 11 characters are joined by `...`, unless the cut would swallow the
//! end of a sentence, in which case the first 9 and last 10 are joined by
//! `......`.

use crate::templates::prelude::*;

pub struct Ellipsis;

static INFO: TemplateInfo = TemplateInfo {
    id: "21966",
    title: "(Omitted)",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::word("s")],
    output: &[Field::word("shortened")],
    constraints: &["1 <= n <= 100000", "s has length n, letters and `.` only"],
    samples: &[
        Sample {
            input: "10\nabcde.fghi\n",
            output: "abcde.fghi\n",
        },
        Sample {
            input: "30\nabcdefghijklmnopqrstuvwxyz1234\n",
            output: "abcdefghijk...tuvwxyz1234\n",
        },
        Sample {
            input: "30\nabcdefghijklm.opqrstuvwxyz1234\n",
            output: "abcdefghi......uvwxyz1234\n",
        },
    ],
};

const KEEP: usize = 25;

impl Template for Ellipsis {
    type Input = String;
    type Output = String;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<String, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let s = sc.word_of_len("s", n)?;
        if !s.is_ascii() {
            return Err(InputError::constraint("s", "expected ASCII text"));
        }
        Ok(s.to_string())
    }

    fn solve(&self, s: &String) -> String {
        let len = s.len();
        if len <= KEEP {
            return s.clone();
        }
        if s[11..len - 12].contains('.') {
            format!("{}......{}", &s[..9], &s[len - 10..])
        } else {
            format!("{}...{}", &s[..11], &s[len - 11..])
        }
    }

    fn render(&self, output: &String, out: &mut String) {
        push_line(out, [output]);
    }
}
