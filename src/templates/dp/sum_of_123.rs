//! Number of ordered ways to write `n` as a sum of 1, 2 and 3.
//!
//! Top-down recursion over a memo where `None` marks an entry that has not
//! been computed yet.

use crate::templates::prelude::*;

pub struct SumOf123;

static INFO: TemplateInfo = TemplateInfo {
    id: "9095",
    title: "Adding 1, 2, 3",
    category: Category::Dp,
    input: &[Field::int("t"), Field::int("n").repeat("t")],
    output: &[Field::int("ways").repeat("t")],
    constraints: &["1 <= n <= 10"],
    samples: &[Sample {
        input: "3\n4\n7\n10\n",
        output: "7\n44\n274\n",
    }],
};

const MAX_N: usize = 10;

fn ways(n: usize, memo: &mut [Option<u32>]) -> u32 {
    if let Some(v) = memo[n] {
        return v;
    }
    let v = ways(n - 1, memo) + ways(n - 2, memo) + ways(n - 3, memo);
    memo[n] = Some(v);
    v
}

impl Template for SumOf123 {
    type Input = Vec<usize>;
    type Output = Vec<u32>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<usize>, InputError> {
        let t = sc.next_in("t", 1..=1000usize)?;
        sc.values_in("n", t, 1..=MAX_N)
    }

    fn solve(&self, ns: &Vec<usize>) -> Vec<u32> {
        let mut memo = vec![None; MAX_N + 1];
        memo[0] = Some(0);
        memo[1] = Some(1);
        memo[2] = Some(2);
        memo[3] = Some(4);
        ns.iter().map(|&n| ways(n, &mut memo)).collect()
    }

    fn render(&self, output: &Vec<u32>, out: &mut String) {
        for w in output {
            push_line(out, [w]);
        }
    }
}
