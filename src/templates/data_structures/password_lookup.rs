//! Site-to-password lookups through a hash map.

use std::collections::{HashMap, HashSet};

use crate::templates::prelude::*;

pub struct PasswordLookup;

static INFO: TemplateInfo = TemplateInfo {
    id: "17219",
    title: "Finding passwords",
    category: Category::DataStructures,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::word("site").repeat("n"),
        Field::word("password").repeat("n"),
        Field::word("query").repeat("m"),
    ],
    output: &[Field::word("password").repeat("m")],
    constraints: &[
        "1 <= n, m <= 100000",
        "sites and passwords are at most 20 characters",
        "every queried site is stored",
    ],
    samples: &[Sample {
        input: "2 2\nboj.kr abc\nacmicpc.net qwe\nacmicpc.net\nboj.kr\n",
        output: "qwe\nabc\n",
    }],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub stored: Vec<(String, String)>,
    pub queries: Vec<String>,
}

fn short_word(sc: &mut Scanner<'_>, field: &'static str) -> Result<String, InputError> {
    let w = sc.token(field)?;
    if w.len() > 20 {
        return Err(InputError::constraint(field, "longer than 20 characters"));
    }
    Ok(w.to_string())
}

impl Template for PasswordLookup {
    type Input = Input;
    type Output = Vec<String>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100_000usize)?;
        let m = sc.next_in("m", 1..=100_000usize)?;
        let stored = (0..n)
            .map(|_| Ok((short_word(sc, "site")?, short_word(sc, "password")?)))
            .collect::<Result<Vec<_>, InputError>>()?;
        let queries = (0..m)
            .map(|_| short_word(sc, "query"))
            .collect::<Result<Vec<_>, _>>()?;
        let sites: HashSet<&str> = stored.iter().map(|(s, _)| s.as_str()).collect();
        if let Some(q) = queries.iter().find(|q| !sites.contains(q.as_str())) {
            return Err(InputError::constraint("query", format!("site {q:?} is not stored")));
        }
        Ok(Input { stored, queries })
    }

    fn solve(&self, input: &Input) -> Vec<String> {
        let map: HashMap<&str, &str> = input
            .stored
            .iter()
            .map(|(s, p)| (s.as_str(), p.as_str()))
            .collect();
        input
            .queries
            .iter()
            .filter_map(|q| map.get(q.as_str()).map(|p| p.to_string()))
            .collect()
    }

    fn render(&self, output: &Vec<String>, out: &mut String) {
        for p in output {
            out.push_str(p);
            out.push('\n');
        }
    }
}
