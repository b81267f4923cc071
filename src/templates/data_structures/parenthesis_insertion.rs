//! Fewest parentheses to insert so that a string becomes balanced.

use crate::templates::prelude::*;

pub struct ParenthesisInsertion;

static INFO: TemplateInfo = TemplateInfo {
    id: "11899",
    title: "Inserting parentheses",
    category: Category::DataStructures,
    input: &[Field::word("s")],
    output: &[Field::int("insertions")],
    constraints: &["1 <= |s| <= 50", "s consists of ( and )"],
    samples: &[
        Sample {
            input: ")))()\n",
            output: "3\n",
        },
        Sample {
            input: "())(()\n",
            output: "2\n",
        },
    ],
};

impl Template for ParenthesisInsertion {
    type Input = String;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<String, InputError> {
        let s = sc.word_of("s", |b| b == b'(' || b == b')')?;
        if s.len() > 50 {
            return Err(InputError::constraint("s", "longer than 50 characters"));
        }
        Ok(s.to_string())
    }

    fn solve(&self, s: &String) -> usize {
        let mut stack: Vec<u8> = Vec::new();
        for b in s.bytes() {
            if b == b')' && stack.last() == Some(&b'(') {
                stack.pop();
            } else {
                stack.push(b);
            }
        }
        stack.len()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
