//! Smallest height-difference tolerance leaving at most `k` people
//! uncomfortable next to a neighbour.

use crate::templates::prelude::*;

pub struct ShoulderLink;

static INFO: TemplateInfo = TemplateInfo {
    id: "27932",
    title: "Arm in arm",
    category: Category::BinarySearch,
    input: &[Field::int("n"), Field::int("k"), Field::int("height").repeat("n")],
    output: &[Field::int("tolerance")],
    constraints: &["1 <= n <= 200000", "0 <= k <= n", "1 <= height <= 1000000000"],
    samples: &[
        Sample {
            input: "5 2\n1 3 4 8 9\n",
            output: "2\n",
        },
        Sample {
            input: "4 0\n5 5 5 5\n",
            output: "0\n",
        },
    ],
};

const MAX_TOLERANCE: u64 = 1_000_000_000;

#[derive(Debug, Clone)]
pub struct Input {
    pub k: usize,
    pub heights: Vec<u64>,
}

/// People with a neighbour more than `m` taller or shorter.
fn uncomfortable(heights: &[u64], m: u64) -> usize {
    (0..heights.len())
        .filter(|&i| {
            let left = i > 0 && heights[i - 1].abs_diff(heights[i]) > m;
            let right = i + 1 < heights.len() && heights[i + 1].abs_diff(heights[i]) > m;
            left || right
        })
        .count()
}

impl Template for ShoulderLink {
    type Input = Input;
    type Output = u64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=200_000usize)?;
        let k = sc.next_in("k", 0..=n)?;
        let heights = sc.values_in("height", n, 1..=1_000_000_000u64)?;
        Ok(Input { k, heights })
    }

    fn solve(&self, input: &Input) -> u64 {
        let (mut lo, mut hi) = (0u64, MAX_TOLERANCE);
        let mut best = MAX_TOLERANCE;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            if uncomfortable(&input.heights, mid) <= input.k {
                best = mid;
                if mid == 0 {
                    break;
                }
                hi = mid - 1;
            } else {
                lo = mid + 1;
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
    fn counts_each_person_once() {
        assert_eq!(uncomfortable(&[1, 3, 4, 8, 9], 1), 4);
        assert_eq!(uncomfortable(&[7], 0), 0);
    }
}
