//! Distinct sums `a + b + c` whose decimal digits are all 5 or 8.

use std::collections::BTreeSet;

use crate::templates::prelude::*;

pub struct LuckySums;

static INFO: TemplateInfo = TemplateInfo {
    id: "9575",
    title: "Lucky numbers",
    category: Category::Bruteforcing,
    input: &[
        Field::int("t"),
        Field::int("na"),
        Field::int("a").repeat("na"),
        Field::int("nb"),
        Field::int("b").repeat("nb"),
        Field::int("nc"),
        Field::int("c").repeat("nc"),
    ],
    output: &[Field::int("count").repeat("t")],
    constraints: &["1 <= t <= 100", "1 <= na, nb, nc <= 100", "1 <= a, b, c <= 30000"],
    samples: &[Sample {
        input: "2\n3\n1 10 100\n3\n2 20 200\n3\n5 50 500\n2\n1 3\n2\n2 2\n3\n1 2 50\n",
        output: "1\n2\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Case {
    pub a: Vec<u32>,
    pub b: Vec<u32>,
    pub c: Vec<u32>,
}

fn is_lucky(mut k: u32) -> bool {
    if k == 0 {
        return false;
    }
    while k > 0 {
        if !matches!(k % 10, 5 | 8) {
            return false;
        }
        k /= 10;
    }
    true
}

fn read_list(sc: &mut Scanner<'_>, size: &'static str, field: &'static str) -> Result<Vec<u32>, InputError> {
    let n = sc.next_in(size, 1..=100usize)?;
    sc.values_in(field, n, 1..=30_000u32)
}

impl Template for LuckySums {
    type Input = Vec<Case>;
    type Output = Vec<usize>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Case>, InputError> {
        let t = sc.next_in("t", 1..=100usize)?;
        (0..t)
            .map(|_| {
                Ok(Case {
                    a: read_list(sc, "na", "a")?,
                    b: read_list(sc, "nb", "b")?,
                    c: read_list(sc, "nc", "c")?,
                })
            })
            .collect()
    }

    fn solve(&self, cases: &Vec<Case>) -> Vec<usize> {
        cases
            .iter()
            .map(|case| {
                let mut sums = BTreeSet::new();
                for &a in &case.a {
                    for &b in &case.b {
                        for &c in &case.c {
                            if is_lucky(a + b + c) {
                                sums.insert(a + b + c);
                            }
                        }
                    }
                }
                sums.len()
            })
            .collect()
    }

    fn render(&self, output: &Vec<usize>, out: &mut String) {
        for count in output {
            push_line(out, [count]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_lucky;

    #[test]
    fn lucky_digits() {
        assert!(is_lucky(585));
        assert!(is_lucky(8));
        assert!(!is_lucky(0));
        assert!(!is_lucky(50));
    }
}
