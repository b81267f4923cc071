//! Password validation against a fixed rule list.
//!
//! A password is valid when it is 9 to 20 characters long, has at least two
//! lowercase letters, two uppercase letters, one digit and two symbols from
//! `!@#$%^&*.,;/?`, never repeats a character three times in a row, is not a
//! palindrome over its letters and digits (ignoring case), and does not
//! contain any banned word, forwards or backwards, as a case-insensitive
//! subsequence.

use crate::templates::prelude::*;

pub struct PasswordRules;

static INFO: TemplateInfo = TemplateInfo {
    id: "9309",
    title: "Password validation",
    category: Category::String,
    input: &[Field::int("t"), Field::word("password").repeat("t")],
    output: &[Field::line("verdict").repeat("t")],
    constraints: &["1 <= t <= 100", "passwords are printable ASCII without spaces, at most 100 characters"],
    samples: &[Sample {
        input: "6\nPassword123!!\nAbCdE1234!@xyz\nQwErTy7!@#zx\nAa1!Bb2@bAa\nAb1!!!Cd2@xy\nAb1!@2bA\n",
        output: "Invalid Password\nValid Password\nValid Password\nValid Password\nInvalid Password\nInvalid Password\n",
    }],
};

const SYMBOLS: &[u8] = b"!@#$%^&*.,;/?";
const BANNED: [&str; 4] = ["password", "virginia", "cavalier", "code"];

/// True if `word` appears in `s` as a subsequence, ignoring ASCII case.
fn contains_subsequence(s: &[u8], word: impl IntoIterator<Item = u8>) -> bool {
    let mut rest = s.iter();
    word.into_iter()
        .all(|w| rest.any(|c| c.eq_ignore_ascii_case(&w)))
}

fn is_valid(pw: &[u8]) -> bool {
    let count = |pred: fn(&u8) -> bool| pw.iter().filter(|c| pred(c)).count();
    if !(9..=20).contains(&pw.len())
        || count(u8::is_ascii_lowercase) < 2
        || count(u8::is_ascii_uppercase) < 2
        || count(u8::is_ascii_digit) == 0
        || pw.iter().filter(|c| SYMBOLS.contains(c)).count() < 2
    {
        return false;
    }
    if pw.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        return false;
    }
    let folded: Vec<u8> = pw
        .iter()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(u8::to_ascii_lowercase)
        .collect();
    if folded.iter().eq(folded.iter().rev()) {
        return false;
    }
    !BANNED.iter().any(|word| {
        contains_subsequence(pw, word.bytes()) || contains_subsequence(pw, word.bytes().rev())
    })
}

impl Template for PasswordRules {
    type Input = Vec<String>;
    type Output = Vec<bool>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<String>, InputError> {
        let t = sc.next_in("t", 1..=100usize)?;
        (0..t)
            .map(|_| {
                let pw = sc.word_of("password", |b| b.is_ascii_graphic())?;
                if pw.len() > 100 {
                    return Err(InputError::constraint("password", "longer than 100 characters"));
                }
                Ok(pw.to_string())
            })
            .collect()
    }

    fn solve(&self, passwords: &Vec<String>) -> Vec<bool> {
        passwords.iter().map(|pw| is_valid(pw.as_bytes())).collect()
    }

    fn render(&self, output: &Vec<bool>, out: &mut String) {
        for &ok in output {
            push_line(out, [if ok { "Valid Password" } else { "Invalid Password" }]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banned_words_match_scattered_and_reversed() {
        assert!(contains_subsequence(b"xCyOzDwE", "code".bytes()));
        assert!(contains_subsequence(b"e.D.o.C", "code".bytes().rev()));
        assert!(!contains_subsequence(b"cod", "code".bytes()));
    }

    #[test]
    fn triple_run_at_the_end_is_rejected() {
        assert!(is_valid(b"Ab1!@Cd2xy"));
        assert!(!is_valid(b"Ab1!@Cd2xyyy"));
    }
}
