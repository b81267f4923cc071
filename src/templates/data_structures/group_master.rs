//! Two-way lookup between groups and their members.

use std::collections::{BTreeMap, HashMap};

use crate::templates::prelude::*;

pub struct GroupMaster;

static INFO: TemplateInfo = TemplateInfo {
    id: "16165",
    title: "Girl group master",
    category: Category::DataStructures,
    input: &[
        Field::int("n"),
        Field::int("m"),
        Field::word("group").repeat("n"),
        Field::int("size").repeat("n"),
        Field::word("member").repeat("size"),
        Field::word("name").repeat("m"),
        Field::int("kind").repeat("m"),
    ],
    output: &[Field::word("answer").until_end()],
    constraints: &[
        "1 <= n, m <= 100",
        "1 <= size <= 100",
        "names are unique lowercase words of at most 100 letters",
        "kind 0 asks for the members of a group, kind 1 for a member's group",
    ],
    samples: &[Sample {
        input: "3 4\ntwice\n4\njihyo\ndahyeon\nmina\nmomo\nblackpink\n2\njisoo\nlisa\nredvelvet\n2\nwendy\nirene\nmomo\n1\nblackpink\n0\nirene\n1\ntwice\n0\n",
        output: "twice\njisoo\nlisa\nredvelvet\ndahyeon\njihyo\nmina\nmomo\n",
    }],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Members(String),
    GroupOf(String),
}

#[derive(Debug, Clone)]
pub struct Input {
    pub groups: BTreeMap<String, Vec<String>>,
    pub queries: Vec<Query>,
}

fn name(sc: &mut Scanner<'_>, field: &'static str) -> Result<String, InputError> {
    let w = sc.word_of(field, |b| b.is_ascii_lowercase())?;
    if w.len() > 100 {
        return Err(InputError::constraint(field, "longer than 100 letters"));
    }
    Ok(w.to_string())
}

impl Template for GroupMaster {
    type Input = Input;
    type Output = Vec<String>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        let m = sc.next_in("m", 1..=100usize)?;
        let mut groups = BTreeMap::new();
        let mut known: HashMap<String, bool> = HashMap::new();
        for _ in 0..n {
            let group = name(sc, "group")?;
            let size = sc.next_in("size", 1..=100usize)?;
            let members = (0..size)
                .map(|_| name(sc, "member"))
                .collect::<Result<Vec<_>, _>>()?;
            for (who, is_group) in members.iter().map(|m| (m, false)).chain([(&group, true)]) {
                if known.insert(who.clone(), is_group).is_some() {
                    return Err(InputError::constraint("name", format!("{who:?} is used twice")));
                }
            }
            groups.insert(group, members);
        }
        let mut queries = Vec::with_capacity(m);
        for _ in 0..m {
            let who = name(sc, "name")?;
            let kind = sc.next_in("kind", 0..=1u8)?;
            match (kind, known.get(&who)) {
                (0, Some(true)) => queries.push(Query::Members(who)),
                (1, Some(false)) => queries.push(Query::GroupOf(who)),
                _ => {
                    return Err(InputError::constraint(
                        "name",
                        format!("no {} named {who:?}", if kind == 0 { "group" } else { "member" }),
                    ))
                }
            }
        }
        Ok(Input { groups, queries })
    }

    fn solve(&self, input: &Input) -> Vec<String> {
        let mut sorted = input.groups.clone();
        let mut group_of: HashMap<&str, &str> = HashMap::new();
        for (group, members) in &input.groups {
            for m in members {
                group_of.insert(m, group);
            }
        }
        sorted.values_mut().for_each(|m| m.sort());

        let mut lines = Vec::new();
        for q in &input.queries {
            match q {
                Query::Members(g) => lines.extend(sorted.get(g).into_iter().flatten().cloned()),
                Query::GroupOf(m) => lines.extend(group_of.get(m.as_str()).map(|g| g.to_string())),
            }
        }
        lines
    }

    fn render(&self, output: &Vec<String>, out: &mut String) {
        for line in output {
            out.push_str(line);
            out.push('\n');
        }
    }
}
