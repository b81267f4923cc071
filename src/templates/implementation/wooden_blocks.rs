//! Whether each block sequence fits together, starting at block 1 and
//! ending at block 2.

use crate::templates::prelude::*;

pub struct WoodenBlocks;

static INFO: TemplateInfo = TemplateInfo {
    id: "4921",
    title: "Wooden blocks",
    category: Category::Implementation,
    input: &[Field::word("sequence").until("0")],
    output: &[Field::line("verdict").until_end()],
    constraints: &["sequences are digits 1 to 8, at most 1000 long"],
    samples: &[Sample {
        input: "142\n15862\n1587862\n1442\n1\n0\n",
        output: "1. VALID\n2. VALID\n3. VALID\n4. NOT\n5. NOT\n",
    }],
};

/// Whether block `next` may follow block `prev`.
fn joins(prev: u8, next: u8) -> bool {
    matches!(
        (prev, next),
        (b'1' | b'3', b'4' | b'5') | (b'4' | b'6', b'2' | b'3') | (b'5' | b'7', b'8') | (b'8', b'6' | b'7')
    )
}

fn valid(seq: &[u8]) -> bool {
    seq.first() == Some(&b'1') && seq.last() == Some(&b'2') && seq.windows(2).all(|w| joins(w[0], w[1]))
}

impl Template for WoodenBlocks {
    type Input = Vec<String>;
    type Output = Vec<bool>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<String>, InputError> {
        let mut seqs = Vec::new();
        loop {
            let seq = sc.word_of("sequence", |b| (b'0'..=b'8').contains(&b))?;
            if seq == "0" {
                return Ok(seqs);
            }
            if seq.len() > 1000 || seq.contains('0') {
                return Err(InputError::constraint("sequence", "expected at most 1000 digits 1 to 8"));
            }
            seqs.push(seq.to_string());
        }
    }

    fn solve(&self, seqs: &Vec<String>) -> Vec<bool> {
        seqs.iter().map(|s| valid(s.as_bytes())).collect()
    }

    fn render(&self, output: &Vec<bool>, out: &mut String) {
        for (i, ok) in output.iter().enumerate() {
            let verdict = if *ok { "VALID" } else { "NOT" };
            push_line(out, [format!("{}.", i + 1), verdict.to_string()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::valid;

    #[test]
    fn endpoints_matter() {
        assert!(valid(b"142"));
        assert!(!valid(b"42"));
        assert!(!valid(b"14"));
        assert!(!valid(b"12"));
    }
}
