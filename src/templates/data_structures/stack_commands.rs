//! Integer stack driven by text commands.

use crate::templates::prelude::*;

pub struct StackCommands;

static INFO: TemplateInfo = TemplateInfo {
    id: "10828",
    title: "Stack",
    category: Category::DataStructures,
    input: &[Field::int("n"), Field::line("command").repeat("n")],
    output: &[Field::int("reply").until_end()],
    constraints: &[
        "1 <= n <= 10000",
        "command is push X, pop, size, empty or top",
        "1 <= X <= 100000",
    ],
    samples: &[Sample {
        input: "14\npush 1\npush 2\ntop\nsize\nempty\npop\npop\npop\nsize\nempty\npop\npush 3\nempty\ntop\n",
        output: "2\n2\n0\n2\n1\n-1\n0\n1\n-1\n0\n3\n",
    }],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Push(i32),
    Pop,
    Size,
    Empty,
    Top,
}

impl Template for StackCommands {
    type Input = Vec<Command>;
    type Output = Vec<i64>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Command>, InputError> {
        let n = sc.next_in("n", 1..=10_000usize)?;
        (0..n)
            .map(|_| match sc.token("command")? {
                "push" => Ok(Command::Push(sc.next_in("X", 1..=100_000)?)),
                "pop" => Ok(Command::Pop),
                "size" => Ok(Command::Size),
                "empty" => Ok(Command::Empty),
                "top" => Ok(Command::Top),
                other => Err(InputError::constraint("command", format!("unknown command {other:?}"))),
            })
            .collect()
    }

    fn solve(&self, commands: &Vec<Command>) -> Vec<i64> {
        let mut stack: Vec<i32> = Vec::new();
        let mut replies = Vec::new();
        for cmd in commands {
            match *cmd {
                Command::Push(x) => stack.push(x),
                Command::Pop => replies.push(stack.pop().map_or(-1, i64::from)),
                Command::Size => replies.push(stack.len() as i64),
                Command::Empty => replies.push(i64::from(stack.is_empty())),
                Command::Top => replies.push(stack.last().map_or(-1, |&x| i64::from(x))),
            }
        }
        replies
    }

    fn render(&self, output: &Vec<i64>, out: &mut String) {
        for r in output {
            push_line(out, [r]);
        }
    }
}
