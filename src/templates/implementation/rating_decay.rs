//! Weighted user rating where each solve's weight is the larger of a
//! yearly half-life decay and a 0.9 per newer solve decay.

use crate::templates::prelude::*;

pub struct RatingDecay;

static INFO: TemplateInfo = TemplateInfo {
    id: "25318",
    title: "solved.ac 2022",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::line("solve").repeat("n")],
    output: &[Field::int("rating")],
    constraints: &[
        "0 <= n <= 100000",
        "solve is `YYYY/MM/DD hh:mm:ss level`, 2000 <= year <= 2099, in chronological order",
        "0 <= level <= 30",
    ],
    samples: &[
        Sample {
            input: "2\n2021/01/01 00:00:00 10\n2022/01/01 00:00:00 20\n",
            output: "15\n",
        },
        Sample {
            input: "3\n2020/02/28 12:00:00 7\n2021/06/30 08:15:00 15\n2022/12/31 23:59:59 3\n",
            output: "8\n",
        },
        Sample {
            input: "0\n",
            output: "0\n",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solve {
    /// Fractional days since 2000-01-01.
    pub day: f64,
    pub level: f64,
}

fn is_leap(y: u32) -> bool {
    y % 400 == 0 || (y % 4 == 0 && y % 100 != 0)
}

fn month_len(y: u32, m: u32) -> u32 {
    match m {
        2 if is_leap(y) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn split3(token: &str, sep: char) -> Option<[u32; 3]> {
    let mut parts = token.split(sep).map(|p| p.parse::<u32>().ok());
    let out = [parts.next()??, parts.next()??, parts.next()??];
    parts.next().is_none().then_some(out)
}

fn timestamp(sc: &mut Scanner<'_>) -> Result<f64, InputError> {
    let date = sc.token("solve")?;
    let time = sc.token("solve")?;
    let bad = |token: &str| InputError::Invalid {
        field: "solve",
        token: token.to_string(),
    };
    let [y, m, d] = split3(date, '/').ok_or_else(|| bad(date))?;
    let [hh, mm, ss] = split3(time, ':').ok_or_else(|| bad(time))?;
    if !(2000..=2099).contains(&y) || !(1..=12).contains(&m) || d == 0 || d > month_len(y, m) {
        return Err(bad(date));
    }
    if hh > 23 || mm > 59 || ss > 59 {
        return Err(bad(time));
    }
    let days: u32 = (2000..y).map(|yy| if is_leap(yy) { 366 } else { 365 }).sum::<u32>()
        + (1..m).map(|mm| month_len(y, mm)).sum::<u32>()
        + d;
    Ok(f64::from(days) + f64::from(hh * 3600 + mm * 60 + ss) / 86_400.0)
}

impl Template for RatingDecay {
    type Input = Vec<Solve>;
    type Output = f64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Solve>, InputError> {
        let n = sc.next_in("n", 0..=100_000usize)?;
        let mut solves: Vec<Solve> = Vec::with_capacity(n);
        for _ in 0..n {
            let day = timestamp(sc)?;
            let level: u32 = sc.next_in("solve", 0..=30)?;
            if solves.last().is_some_and(|prev| prev.day > day) {
                return Err(InputError::constraint("solve", "not in chronological order"));
            }
            solves.push(Solve {
                day,
                level: f64::from(level),
            });
        }
        Ok(solves)
    }

    fn solve(&self, solves: &Vec<Solve>) -> f64 {
        let Some(latest) = solves.last() else {
            return 0.0;
        };
        let n = solves.len();
        let (mut weighted, mut total) = (0.0, 0.0);
        for (i, s) in solves.iter().enumerate() {
            let by_age = 0.5f64.powf((latest.day - s.day) / 365.0);
            let by_rank = 0.9f64.powi((n - i - 1) as i32);
            let p = by_age.max(by_rank);
            weighted += p * s.level;
            total += p;
        }
        (weighted / total).round()
    }

    fn render(&self, output: &f64, out: &mut String) {
        push_line(out, [format!("{output:.0}")]);
    }
}
