//! Balanced-parenthesis check by depth counting.

use crate::templates::prelude::*;

pub struct ParenthesisString;

static INFO: TemplateInfo = TemplateInfo {
    id: "9012",
    title: "Parenthesis",
    category: Category::DataStructures,
    input: &[Field::int("t"), Field::word("ps").repeat("t")],
    output: &[Field::word("verdict").repeat("t")],
    constraints: &["2 <= |ps| <= 50", "ps consists of ( and )"],
    samples: &[Sample {
        input: "6\n(())())\n(((()())()\n(()())((()))\n((()()(()))(((())))()\n()()()()(()()())()\n(()((())()(\n",
        output: "NO\nNO\nYES\nNO\nYES\nNO\n",
    }],
};

fn balanced(s: &str) -> bool {
    let mut depth: i32 = 0;
    for b in s.bytes() {
        depth += if b == b'(' { 1 } else { -1 };
        if depth < 0 {
            return false;
        }
    }
    depth == 0
}

impl Template for ParenthesisString {
    type Input = Vec<String>;
    type Output = Vec<bool>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<String>, InputError> {
        let t = sc.next_in("t", 1..=1000usize)?;
        (0..t)
            .map(|_| {
                let ps = sc.word_of("ps", |b| b == b'(' || b == b')')?;
                if ps.len() > 50 {
                    return Err(InputError::constraint("ps", "longer than 50 characters"));
                }
                Ok(ps.to_string())
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<String>) -> Vec<bool> {
        cases.iter().map(|s| balanced(s)).collect()
    }

    fn render(&self, output: &Vec<bool>, out: &mut String) {
        for &ok in output {
            out.push_str(if ok { "YES\n" } else { "NO\n" });
        }
    }
}
