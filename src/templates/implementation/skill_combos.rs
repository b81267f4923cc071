//! Skills that fire successfully before the first combo finisher is used
//! without its starter.

use crate::templates::prelude::*;

pub struct SkillCombos;

static INFO: TemplateInfo = TemplateInfo {
    id: "25497",
    title: "Skill chain master Ims",
    category: Category::Implementation,
    input: &[Field::int("n"), Field::word("skills")],
    output: &[Field::int("fired")],
    constraints: &[
        "1 <= n <= 200000",
        "skills has length n over 1-9 (standalone), S then K, L then R",
    ],
    samples: &[
        Sample {
            input: "4\n1SK2\n",
            output: "3\n",
        },
        Sample {
            input: "5\nSSKRK\n",
            output: "1\n",
        },
        Sample {
            input: "6\nL1RKS2\n",
            output: "2\n",
        },
    ],
};

impl Template for SkillCombos {
    type Input = String;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<String, InputError> {
        let n = sc.next_in("n", 1..=200_000usize)?;
        let skills = sc.word_of_len("skills", n)?;
        if let Some(bad) = skills.bytes().find(|b| !matches!(b, b'1'..=b'9' | b'S' | b'K' | b'L' | b'R')) {
            return Err(InputError::constraint("skills", format!("unknown skill {:?}", bad as char)));
        }
        Ok(skills.to_string())
    }

    fn solve(&self, skills: &String) -> usize {
        let (mut s_ready, mut l_ready, mut fired) = (0usize, 0usize, 0);
        for b in skills.bytes() {
            let ready = match b {
                b'S' => {
                    s_ready += 1;
                    continue;
                }
                b'L' => {
                    l_ready += 1;
                    continue;
                }
                b'K' => &mut s_ready,
                b'R' => &mut l_ready,
                _ => {
                    fired += 1;
                    continue;
                }
            };
            if *ready == 0 {
                break;
            }
            *ready -= 1;
            fired += 1;
        }
        fired
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
