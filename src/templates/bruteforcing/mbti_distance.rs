//! Smallest psychological distance among any three people.
//!
//! There are only 16 MBTI types, so with 33 or more people some type
//! occurs three times and the answer is 0.

use crate::templates::prelude::*;

pub struct MbtiDistance;

static INFO: TemplateInfo = TemplateInfo {
    id: "20529",
    title: "Psychological distance of the closest three",
    category: Category::Bruteforcing,
    input: &[
        Field::int("t"),
        Field::int("n"),
        Field::word("mbti").repeat("n"),
    ],
    output: &[Field::int("distance").repeat("t")],
    constraints: &[
        "1 <= t <= 50",
        "3 <= n <= 100000",
        "mbti is one of the 16 four-letter types",
    ],
    samples: &[Sample {
        input: "3\n3\nENTJ INTP ESFJ\n4\nESFP ESFP ESFP ESFP\n5\nINFP INFP ESTP ESTJ ISTJ\n",
        output: "8\n0\n4\n",
    }],
};

const PIGEONHOLE: usize = 33;
const AXES: [[u8; 2]; 4] = [[b'E', b'I'], [b'S', b'N'], [b'T', b'F'], [b'J', b'P']];

/// Type as a 4-bit mask, one bit per axis.
fn encode(word: &str) -> Result<u8, InputError> {
    let bytes = word.as_bytes();
    if bytes.len() != 4 {
        return Err(InputError::constraint("mbti", format!("{word:?} is not four letters")));
    }
    let mut mask = 0u8;
    for (i, (&b, axis)) in bytes.iter().zip(AXES.iter()).enumerate() {
        match axis.iter().position(|&a| a == b) {
            Some(bit) => mask |= (bit as u8) << i,
            None => {
                return Err(InputError::constraint("mbti", format!("{word:?} is not an MBTI type")))
            }
        }
    }
    Ok(mask)
}

fn distance(a: u8, b: u8) -> u32 {
    (a ^ b).count_ones()
}

impl Template for MbtiDistance {
    type Input = Vec<Vec<u8>>;
    type Output = Vec<u32>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<u8>>, InputError> {
        let t = sc.next_in("t", 1..=50usize)?;
        let mut cases = Vec::with_capacity(t);
        for _ in 0..t {
            let n = sc.next_in("n", 3..=100_000usize)?;
            let people = (0..n)
                .map(|_| encode(sc.token("mbti")?))
                .collect::<Result<Vec<_>, _>>()?;
            cases.push(people);
        }
        Ok(cases)
    }

    fn solve(&self, cases: &Vec<Vec<u8>>) -> Vec<u32> {
        cases
            .iter()
            .map(|people| {
                if people.len() >= PIGEONHOLE {
                    return 0;
                }
                let n = people.len();
                let mut best = u32::MAX;
                for i in 0..n {
                    for j in i + 1..n {
                        for k in j + 1..n {
                            let (a, b, c) = (people[i], people[j], people[k]);
                            best = best.min(distance(a, b) + distance(b, c) + distance(a, c));
                        }
                    }
                }
                best
            })
            .collect()
    }

    fn render(&self, output: &Vec<u32>, out: &mut String) {
        for d in output {
            push_line(out, [d]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_letters() {
        assert!(encode("ABCD").is_err());
        assert!(encode("INT").is_err());
        assert_eq!(distance(encode("ENTJ").unwrap(), encode("INTP").unwrap()), 2);
    }
}
