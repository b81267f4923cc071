//! Whether round and square brackets balance on each line of text.

use crate::templates::prelude::*;

pub struct BalancedWorld;

static INFO: TemplateInfo = TemplateInfo {
    id: "4949",
    title: "Balanced world",
    category: Category::String,
    input: &[Field::line("text").until(".")],
    output: &[Field::word("verdict").until_end()],
    constraints: &["each line has at most 100 characters and ends with `.`", "input ends with a line holding only `.`"],
    samples: &[Sample {
        input: "So when I die (the [first] I will see in (heaven) a score list).\n[ first in ] ( first out ).\nHalf Moon tonight (At least it is better than no Moon at all].\nA rope may form )( a trail in a maze.\nHelp( I[m being held prisoner in a fortune cookie factory)].\n([ (([( [ ] ) ( ) (( ))] )) ]).\n .\n.\n",
        output: "yes\nyes\nno\nno\nno\nyes\nyes\n",
    }],
};

fn balanced(line: &str) -> bool {
    let mut open = Vec::new();
    for b in line.bytes() {
        match b {
            b'(' | b'[' => open.push(b),
            b')' if open.pop() != Some(b'(') => return false,
            b']' if open.pop() != Some(b'[') => return false,
            _ => {}
        }
    }
    open.is_empty()
}

impl Template for BalancedWorld {
    type Input = Vec<String>;
    type Output = Vec<bool>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<String>, InputError> {
        let mut lines = Vec::new();
        loop {
            let line = sc.line("text")?;
            if line == "." {
                return Ok(lines);
            }
            if line.len() > 100 {
                return Err(InputError::constraint("text", "line longer than 100 characters"));
            }
            lines.push(line.to_string());
        }
    }

    fn solve(&self, lines: &Vec<String>) -> Vec<bool> {
        lines.iter().map(|l| balanced(l)).collect()
    }

    fn render(&self, output: &Vec<bool>, out: &mut String) {
        for &ok in output {
            push_line(out, [if ok { "yes" } else { "no" }]);
        }
    }
}
