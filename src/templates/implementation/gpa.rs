//! Credit-weighted grade point average over twenty courses, skipping
//! pass/fail courses.

use crate::templates::prelude::*;

pub struct Gpa;

static INFO: TemplateInfo = TemplateInfo {
    id: "25206",
    title: "Your GPA",
    category: Category::Implementation,
    input: &[
        Field::word("course").repeat("20"),
        Field::decimal("credit").repeat("20"),
        Field::word("grade").repeat("20"),
    ],
    output: &[Field::decimal("gpa")],
    constraints: &[
        "course names are 1 to 50 letters",
        "credit is one of 1.0, 2.0, 3.0, 4.0",
        "grade is one of A+ A0 B+ B0 C+ C0 D+ D0 F P, at least one is not P",
        "printed with 6 decimals",
    ],
    samples: &[Sample {
        input: "ObjectOrientedProgramming1 3.0 A+\nIntroductiontoComputerEngineering 3.0 A+\nObjectOrientedProgramming2 3.0 A0\nCreativeComputerEngineeringDesign 3.0 A+\nAssemblyLanguage 3.0 A+\nInternetProgramming 3.0 B0\nApplicationProgramminginJava 3.0 A0\nSystemProgramming 3.0 B0\nOperatingSystem 3.0 B0\nWirelessCommunicationsandNetworking 3.0 C+\nLogicCircuits 3.0 B0\nDataStructure 4.0 A+\nMicroprocessorApplication 3.0 B+\nEmbeddedSoftware 3.0 C0\nComputerSecurity 3.0 D+\nDatabase 3.0 C+\nAlgorithm 3.0 B0\nCapstoneDesigninCSE 3.0 B+\nCompilerDesign 3.0 D0\nProblemSolving 4.0 P\n",
        output: "3.284483\n",
    }],
};

const COURSES: usize = 20;

/// Grade points, `None` for pass/fail.
fn points(grade: &str) -> Option<Option<f64>> {
    let p = match grade {
        "A+" => 4.5,
        "A0" => 4.0,
        "B+" => 3.5,
        "B0" => 3.0,
        "C+" => 2.5,
        "C0" => 2.0,
        "D+" => 1.5,
        "D0" => 1.0,
        "F" => 0.0,
        "P" => return Some(None),
        _ => return None,
    };
    Some(Some(p))
}

impl Template for Gpa {
    /// `(credit, points)` of each graded course.
    type Input = Vec<(f64, f64)>;
    type Output = f64;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<(f64, f64)>, InputError> {
        let mut graded = Vec::new();
        for _ in 0..COURSES {
            let course = sc.token("course")?;
            if course.len() > 50 {
                return Err(InputError::constraint("course", "longer than 50 letters"));
            }
            let credit: f64 = sc.next("credit")?;
            if ![1.0, 2.0, 3.0, 4.0].contains(&credit) {
                return Err(InputError::constraint("credit", format!("{credit} is not a valid credit")));
            }
            let grade = sc.token("grade")?;
            match points(grade) {
                Some(Some(p)) => graded.push((credit, p)),
                Some(None) => {}
                None => return Err(InputError::constraint("grade", format!("unknown grade {grade:?}"))),
            }
        }
        if graded.is_empty() {
            return Err(InputError::constraint("grade", "every course is pass/fail"));
        }
        Ok(graded)
    }

    fn solve(&self, graded: &Vec<(f64, f64)>) -> f64 {
        let credits: f64 = graded.iter().map(|&(c, _)| c).sum();
        let weighted: f64 = graded.iter().map(|&(c, p)| c * p).sum();
        weighted / credits
    }

    fn render(&self, output: &f64, out: &mut String) {
        push_line(out, [format!("{output:.6}")]);
    }
}
