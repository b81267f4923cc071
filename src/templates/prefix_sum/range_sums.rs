use crate::templates::prelude::*;

pub struct RangeSums;

static INFO: TemplateInfo = TemplateInfo {
    id: "11659",
    title: "Range sum query 4",
    category: Category::PrefixSum,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::int("a").repeat("n"),
        Field::int("range").repeat("2 * m"),
    ],
    output: &[Field::int("sum").repeat("m")],
    constraints: &[
        "1 <= n, m <= 100000",
        "1 <= a <= 1000",
        "range is `i j` with 1 <= i <= j <= n",
    ],
    samples: &[Sample {
        input: "5 3\n5 4 3 2 1\n1 3\n2 4\n5 5\n",
        output: "12\n9\n1\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub a: Vec<u64>,
    pub ranges: Vec<(usize, usize)>,
}

impl Template for RangeSums {
    type Input = Input;
    type Output = Vec<u64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let m = sc.next_in("m", 1..=100_000usize)?;
        let a = sc.values_in("a", n, 1..=1000)?;
        let ranges = (0..m)
            .map(|_| {
                let i = sc.next_in("range", 1..=n)?;
                let j = sc.next_in("range", i..=n)?;
                Ok((i, j))
            })
            .collect::<Result<_, InputError>>()?;
        Ok(Input { a, ranges })
    }

    fn solve(&self, input: &Input) -> Vec<u64> {
        let mut prefix = Vec::with_capacity(input.a.len() + 1);
        prefix.push(0);
        for &v in &input.a {
            prefix.push(prefix[prefix.len() - 1] + v);
        }
        input.ranges.iter().map(|&(i, j)| prefix[j] - prefix[i - 1]).collect()
    }

    fn render(&self, output: &Vec<u64>, out: &mut String) {
        for s in output {
            push_line(out, [s]);
        }
    }
}
