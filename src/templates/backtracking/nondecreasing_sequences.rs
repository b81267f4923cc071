//! All non-decreasing sequences of length `m` over `1..=n`, in lexicographic
//! order.

use crate::templates::prelude::*;

pub struct NondecreasingSequences;

static INFO: TemplateInfo = TemplateInfo {
    id: "15652",
    title: "N and M (4)",
    category: Category::Backtracking,
    input: &[Field::int("n"), Field::int("m")],
    output: &[Field::int("sequence").until_end()],
    constraints: &["1 <= m <= n <= 8"],
    samples: &[
        Sample {
            input: "3 1\n",
            output: "1\n2\n3\n",
        },
        Sample {
            input: "3 2\n",
            output: "1 1\n1 2\n1 3\n2 2\n2 3\n3 3\n",
        },
    ],
};

#[derive(Debug, Clone, Copy)]
pub struct Input {
    pub n: u32,
    pub m: usize,
}

fn extend(n: u32, m: usize, seq: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
    if seq.len() == m {
        out.push(seq.clone());
        return;
    }
    let start = seq.last().copied().unwrap_or(1);
    for v in start..=n {
        seq.push(v);
        extend(n, m, seq, out);
        seq.pop();
    }
}

impl Template for NondecreasingSequences {
    type Input = Input;
    type Output = Vec<Vec<u32>>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=8u32)?;
        let m = sc.next_in("m", 1..=n as usize)?;
        Ok(Input { n, m })
    }

    fn solve(&self, input: &Input) -> Vec<Vec<u32>> {
        let mut out = Vec::new();
        extend(input.n, input.m, &mut Vec::with_capacity(input.m), &mut out);
        out
    }

    fn render(&self, output: &Vec<Vec<u32>>, out: &mut String) {
        for seq in output {
            push_line(out, seq);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_multiset_coefficient() {
        // C(n + m - 1, m)
        let seqs = NondecreasingSequences.solve(&Input { n: 4, m: 3 });
        assert_eq!(seqs.len(), 20);
        assert!(seqs.iter().all(|s| s.windows(2).all(|w| w[0] <= w[1])));
    }
}
