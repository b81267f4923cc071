//! Reconstruct typed passwords from keystrokes with cursor moves and
//! backspace.
//!
//! The text is kept as two stacks around the cursor.

use crate::templates::prelude::*;

pub struct Keylogger;

static INFO: TemplateInfo = TemplateInfo {
    id: "5397",
    title: "Keylogger",
    category: Category::DataStructures,
    input: &[Field::int("t"), Field::word("keys").repeat("t")],
    output: &[Field::word("password").repeat("t")],
    constraints: &[
        "1 <= |keys| <= 1000000",
        "keys are letters, digits, < (left), > (right) or - (backspace)",
    ],
    samples: &[Sample {
        input: "2\n<<BP<A>>Cd-\nThIsIsS3Cr3t\n",
        output: "BAPC\nThIsIsS3Cr3t\n",
    }],
};

fn replay(keys: &str) -> String {
    let mut left: Vec<char> = Vec::new();
    let mut right: Vec<char> = Vec::new();
    for ch in keys.chars() {
        match ch {
            '<' => {
                if let Some(c) = left.pop() {
                    right.push(c);
                }
            }
            '>' => {
                if let Some(c) = right.pop() {
                    left.push(c);
                }
            }
            '-' => {
                left.pop();
            }
            c => left.push(c),
        }
    }
    left.into_iter().chain(right.into_iter().rev()).collect()
}

impl Template for Keylogger {
    type Input = Vec<String>;
    type Output = Vec<String>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<String>, InputError> {
        let t = sc.next_in("t", 1..=100usize)?;
        (0..t)
            .map(|_| {
                let keys = sc.word_of("keys", |b| b.is_ascii_alphanumeric() || b"<>-".contains(&b))?;
                if keys.len() > 1_000_000 {
                    return Err(InputError::constraint("keys", "longer than 1000000 keystrokes"));
                }
                Ok(keys.to_string())
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<String>) -> Vec<String> {
        cases.iter().map(|k| replay(k)).collect()
    }

    fn render(&self, output: &Vec<String>, out: &mut String) {
        for p in output {
            out.push_str(p);
            out.push('\n');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::replay;

    #[test]
    fn edits_at_the_edges_are_ignored() {
        assert_eq!(replay("-<<ab>>>"), "ab");
        assert_eq!(replay("ab<<-c"), "cab");
        assert_eq!(replay("abc<-"), "ac");
    }
}
