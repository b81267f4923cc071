//! Longest equal length that still yields `n` cable pieces from the stock.

use crate::templates::prelude::*;

pub struct LanCables;

static INFO: TemplateInfo = TemplateInfo {
    id: "1654",
    title: "Cutting LAN cables",
    category: Category::ParametricSearch,
    input: &[Field::int("k"), Field::int("n"), Field::int("length").repeat("k")],
    output: &[Field::int("piece")],
    constraints: &[
        "1 <= k <= 10000",
        "k <= n <= 1000000",
        "1 <= length <= 2147483647",
    ],
    samples: &[Sample {
        input: "4 11\n802\n743\n457\n539\n",
        output: "200\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub wanted: u64,
    pub lengths: Vec<u64>,
}

impl Input {
    fn pieces(&self, len: u64) -> u64 {
        self.lengths.iter().map(|&l| l / len).sum()
    }
}

impl Template for LanCables {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let k = sc.next_in("k", 1..=10_000usize)?;
        let wanted = sc.next_in("n", k as u64..=1_000_000)?;
        let lengths = sc.values_in("length", k, 1..=i32::MAX as u64)?;
        Ok(Input { wanted, lengths })
    }

    /// Piece count is non-increasing in the piece length, and length 1
    /// always works because `n` never exceeds the total stock.
    fn solve(&self, input: &Input) -> u64 {
        let (mut lo, mut hi) = (1, input.lengths.iter().copied().max().unwrap_or(1));
        let mut best = 1;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            if input.pieces(mid) >= input.wanted {
                best = mid;
                lo = mid + 1;
            } else {
                hi = mid - 1;
            }
        }
        best
    }

    fn render(&self, output: &u64, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_the_last_feasible_length() {
        let input = Input {
            wanted: 11,
            lengths: vec![802, 743, 457, 539],
        };
        let best = LanCables.solve(&input);
        assert!(input.pieces(best) >= 11);
        assert!(input.pieces(best + 1) < 11);
    }
}
