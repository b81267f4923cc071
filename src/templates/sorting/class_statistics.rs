//! Max, min and largest gap between adjacent sorted scores, per class.

use crate::templates::prelude::*;

pub struct ClassStatistics;

static INFO: TemplateInfo = TemplateInfo {
    id: "5800",
    title: "Grade statistics",
    category: Category::Sorting,
    input: &[
        Field::int("k"),
        Field::int("n").repeat("k"),
        Field::int("score").repeat("n"),
    ],
    output: &[Field::line("report").repeat("2 * k")],
    constraints: &["1 <= k <= 100", "2 <= n <= 50", "0 <= score <= 100"],
    samples: &[Sample {
        input: "2\n5 30 25 76 23 78\n6 25 50 70 99 70 90\n",
        output: "Class 1\nMax 78, Min 23, Largest gap 46\nClass 2\nMax 99, Min 25, Largest gap 25\n",
    }],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub max: u32,
    pub min: u32,
    pub gap: u32,
}

impl Template for ClassStatistics {
    type Input = Vec<Vec<u32>>;
    type Output = Vec<Report>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<u32>>, InputError> {
        let k = sc.next_in("k", 1..=100usize)?;
        (0..k)
            .map(|_| {
                let n = sc.next_in("n", 2..=50usize)?;
                sc.values_in("score", n, 0..=100)
            })
            .collect()
    }

    fn solve(&self, classes: &Vec<Vec<u32>>) -> Vec<Report> {
        classes
            .iter()
            .map(|scores| {
                let mut s = scores.clone();
                s.sort_unstable();
                Report {
                    max: s.last().copied().unwrap_or(0),
                    min: s.first().copied().unwrap_or(0),
                    gap: s.windows(2).map(|w| w[1] - w[0]).max().unwrap_or(0),
                }
            })
            .collect()
    }

    fn render(&self, output: &Vec<Report>, out: &mut String) {
        for (i, r) in output.iter().enumerate() {
            push_line(out, [format!("Class {}", i + 1)]);
            push_line(out, [format!("Max {}, Min {}, Largest gap {}", r.max, r.min, r.gap)]);
        }
    }
}
