//! Numbers that get multiplied by `m` when their first digit is moved to the
//! end.
//!
//! The multiplier has at most four decimals and is read as the exact
//! fixed-point value `M = 10000 m`. For a number `x = p * 10^n + r` with
//! leading digit `p`, rotating gives `y = 10 r + p`, and `y = m x` solves to
//! `x = 10000 p (10^(n+1) - 1) / (100000 - M)`.

use crate::templates::prelude::*;

pub struct DigitRotation;

static INFO: TemplateInfo = TemplateInfo {
    id: "9239",
    title: "Steve Jobsung",
    category: Category::Bruteforcing,
    input: &[Field::decimal("m")],
    output: &[Field::int("x").until_end()],
    constraints: &["0 < m <= 1000 with at most 4 decimals", "x has at most 8 digits"],
    samples: &[
        Sample {
            input: "3\n",
            output: "142857\n285714\n",
        },
        Sample {
            input: "3.4\n",
            output: "15\n1515\n151515\n15151515\n",
        },
        Sample {
            input: "2.5\n",
            output: "No solution\n",
        },
    ],
};

const SCALE: i64 = 10_000;

/// Parse a non-negative decimal with at most four fractional digits into
/// units of 1/10000.
fn parse_fixed(token: &str) -> Result<i64, InputError> {
    let invalid = || InputError::Invalid {
        field: "m",
        token: token.to_string(),
    };
    let (int, frac) = token.split_once('.').unwrap_or((token, ""));
    if int.is_empty() && frac.is_empty() {
        return Err(invalid());
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac.len() > 4 {
        return Err(InputError::constraint("m", "more than 4 decimals"));
    }
    let whole: i64 = if int.is_empty() {
        0
    } else {
        int.parse::<i64>().map_err(|_| invalid())?
    };
    let mut units: i64 = 0;
    for (i, b) in frac.bytes().enumerate() {
        units += i64::from(b - b'0') * 10i64.pow(3 - i as u32);
    }
    whole
        .checked_mul(SCALE)
        .and_then(|w| w.checked_add(units))
        .ok_or_else(invalid)
}

impl Template for DigitRotation {
    type Input = i64;
    type Output = Vec<i64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<i64, InputError> {
        let m = parse_fixed(sc.token("m")?)?;
        crate::scanner::check_range("m", m, &(1..=1000 * SCALE))
    }

    fn solve(&self, &m: &i64) -> Vec<i64> {
        let mut found = Vec::new();
        if m >= 10 * SCALE {
            return found;
        }
        let denom = 10 * SCALE - m;
        for n in 0..=7u32 {
            let pow = 10i64.pow(n);
            for p in 1..=9i64 {
                let numer = SCALE * p * (10 * pow - 1);
                if numer % denom != 0 {
                    continue;
                }
                let x = numer / denom;
                let y = 10 * (x - p * pow) + p;
                if y.to_string().len() == n as usize + 1 {
                    found.push(x);
                }
            }
        }
        found
    }

    fn render(&self, output: &Vec<i64>, out: &mut String) {
        if output.is_empty() {
            out.push_str("No solution\n");
        }
        for x in output {
            push_line(out, [x]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_is_exact() {
        assert_eq!(parse_fixed("0.29").unwrap(), 2900);
        assert_eq!(parse_fixed("3").unwrap(), 30_000);
        assert_eq!(parse_fixed(".5").unwrap(), 5000);
        assert!(parse_fixed("1.23456").is_err());
        assert!(parse_fixed("-1").is_err());
        assert!(parse_fixed(".").is_err());
    }

    #[test]
    fn unit_multiplier_gives_repdigits() {
        let xs = DigitRotation.solve(&SCALE);
        assert_eq!(xs.len(), 72);
        assert_eq!(xs[0], 1);
        assert_eq!(*xs.last().unwrap(), 99_999_999);
    }
}
