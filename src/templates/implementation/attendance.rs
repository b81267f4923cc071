//! Members who were in the chat before the meeting started and again
//! during the closing window.

use std::collections::HashSet;

use crate::templates::prelude::*;

pub struct Attendance;

static INFO: TemplateInfo = TemplateInfo {
    id: "19583",
    title: "Cyber opening assembly",
    category: Category::Implementation,
    input: &[
        Field::word("start"),
        Field::word("end"),
        Field::word("stream_end"),
        Field::word("log").until_end(),
    ],
    output: &[Field::int("attended")],
    constraints: &[
        "times are HH:MM with start < end < stream_end",
        "log lines are `HH:MM name` in chronological order, names without spaces",
        "at most 100000 log lines",
    ],
    samples: &[Sample {
        input: "22:00 23:00 23:30\n21:30 malkoring\n21:33 tolelom\n21:34 minjae705\n21:35 hhan14\n21:36 dicohy27\n21:40 906bc\n23:00 906bc\n23:01 tolelom\n23:10 minjae705\n23:11 hhan14\n23:20 dicohy27\n",
        output: "5\n",
    }],
};

const MAX_LOGS: usize = 100_000;

#[derive(Debug, Clone)]
pub struct Input {
    pub start: u32,
    pub end: u32,
    pub stream_end: u32,
    pub logs: Vec<(u32, String)>,
}

/// Minutes since midnight.
fn clock(sc: &mut Scanner<'_>, field: &'static str) -> Result<u32, InputError> {
    let t = sc.token(field)?;
    let bad = || InputError::Invalid {
        field,
        token: t.to_string(),
    };
    let (h, m) = t.split_once(':').ok_or_else(bad)?;
    let h: u32 = h.parse().map_err(|_| bad())?;
    let m: u32 = m.parse().map_err(|_| bad())?;
    if h > 23 || m > 59 {
        return Err(bad());
    }
    Ok(h * 60 + m)
}

impl Template for Attendance {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let start = clock(sc, "start")?;
        let end = clock(sc, "end")?;
        let stream_end = clock(sc, "stream_end")?;
        if !(start < end && end < stream_end) {
            return Err(InputError::constraint("end", "expected start < end < stream_end"));
        }
        let mut logs = Vec::new();
        while sc.has_more() {
            if logs.len() == MAX_LOGS {
                return Err(InputError::constraint("log", "more than 100000 lines"));
            }
            let t = clock(sc, "log")?;
            logs.push((t, sc.token("log")?.to_string()));
        }
        Ok(Input {
            start,
            end,
            stream_end,
            logs,
        })
    }

    fn solve(&self, input: &Input) -> usize {
        let entered: HashSet<&str> = input
            .logs
            .iter()
            .filter(|(t, _)| *t <= input.start)
            .map(|(_, name)| name.as_str())
            .collect();
        let stayed: HashSet<&str> = input
            .logs
            .iter()
            .filter(|(t, _)| (input.end..=input.stream_end).contains(t))
            .map(|(_, name)| name.as_str())
            .collect();
        entered.intersection(&stayed).count()
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
