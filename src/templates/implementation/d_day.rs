//! Days from today until a camp date, or `gg` if the camp is at least a
//! thousand years away.

use crate::templates::prelude::*;

pub struct DDay;

static INFO: TemplateInfo = TemplateInfo {
    id: "1308",
    title: "D-Day",
    category: Category::Implementation,
    input: &[Field::int("today").repeat("3"), Field::int("camp").repeat("3")],
    output: &[Field::word("countdown")],
    constraints: &[
        "dates are `year month day`, 1 <= year <= 9999, valid Gregorian dates",
        "today is not after the camp date",
    ],
    samples: &[
        Sample {
            input: "2008 12 27\n2008 12 28\n",
            output: "D-1\n",
        },
        Sample {
            input: "2012 1 1\n2012 3 1\n",
            output: "D-60\n",
        },
        Sample {
            input: "2012 1 1\n3012 1 1\n",
            output: "gg\n",
        },
        Sample {
            input: "2012 1 1\n3011 12 31\n",
            output: "D-365241\n",
        },
    ],
};

pub type Date = (i64, i64, i64);

fn is_leap(y: i64) -> bool {
    y % 400 == 0 || (y % 4 == 0 && y % 100 != 0)
}

fn month_len(y: i64, m: i64) -> i64 {
    match m {
        2 if is_leap(y) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days since 0001-01-01.
fn ordinal((y, m, d): Date) -> i64 {
    let before = y - 1;
    let year_days = before * 365 + before / 4 - before / 100 + before / 400;
    let month_days: i64 = (1..m).map(|mm| month_len(y, mm)).sum();
    year_days + month_days + d - 1
}

fn date(sc: &mut Scanner<'_>, field: &'static str) -> Result<Date, InputError> {
    let y = sc.next_in(field, 1..=9999)?;
    let m = sc.next_in(field, 1..=12)?;
    let d = sc.next_in(field, 1..=month_len(y, m))?;
    Ok((y, m, d))
}

impl Template for DDay {
    type Input = (Date, Date);
    type Output = Option<i64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<(Date, Date), InputError> {
        let today = date(sc, "today")?;
        let camp = date(sc, "camp")?;
        if camp < today {
            return Err(InputError::constraint("camp", "the camp date is before today"));
        }
        Ok((today, camp))
    }

    fn solve(&self, &(today, camp): &(Date, Date)) -> Option<i64> {
        let limit = (today.0 + 1000, today.1, today.2);
        (camp < limit).then(|| ordinal(camp) - ordinal(today))
    }

    fn render(&self, output: &Option<i64>, out: &mut String) {
        match output {
            Some(days) => push_line(out, [format!("D-{days}")]),
            None => push_line(out, ["gg"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert_eq!(ordinal((2001, 1, 1)) - ordinal((2000, 1, 1)), 366);
        assert_eq!(ordinal((1901, 1, 1)) - ordinal((1900, 1, 1)), 365);
        assert_eq!(ordinal((1, 1, 1)), 0);
    }
}
