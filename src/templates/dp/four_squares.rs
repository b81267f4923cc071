//! Fewest perfect squares summing to `n`.

use crate::templates::prelude::*;

pub struct FourSquares;

static INFO: TemplateInfo = TemplateInfo {
    id: "17626",
    title: "Four squares",
    category: Category::Dp,
    input: &[Field::int("n")],
    output: &[Field::int("squares")],
    constraints: &["1 <= n <= 50000"],
    samples: &[
        Sample {
            input: "25\n",
            output: "1\n",
        },
        Sample {
            input: "26\n",
            output: "2\n",
        },
        Sample {
            input: "11339\n",
            output: "3\n",
        },
        Sample {
            input: "34567\n",
            output: "4\n",
        },
    ],
};

impl Template for FourSquares {
    type Input = usize;
    type Output = u32;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<usize, InputError> {
        sc.next_in("n", 1..=50_000usize)
    }

    fn solve(&self, &n: &usize) -> u32 {
        // dp[i] = 1 + min over squares j*j <= i of dp[i - j*j]
        let mut dp = vec![u32::MAX; n + 1];
        dp[0] = 0;
        for i in 1..=n {
            let mut j = 1;
            while j * j <= i {
                dp[i] = dp[i].min(dp[i - j * j] + 1);
                j += 1;
            }
        }
        dp[n]
    }

    fn render(&self, output: &u32, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        let got: Vec<u32> = (1..=8).map(|n| FourSquares.solve(&n)).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2, 3, 4, 2]);
    }
}
