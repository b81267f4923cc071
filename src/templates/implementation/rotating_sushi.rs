//! Most sushi kinds eaten from `k` consecutive plates on a circular belt,
//! counting the free coupon dish when it is not already in the window.

use crate::templates::prelude::*;

pub struct RotatingSushi;

static INFO: TemplateInfo = TemplateInfo {
    id: "2531",
    title: "Rotating sushi",
    category: Category::Implementation,
    input: &[
        Field::int("n"),
        Field::int("d"),
        Field::int("k"),
        Field::int("c"),
        Field::int("plate").repeat("n"),
    ],
    output: &[Field::int("kinds")],
    constraints: &["2 <= n <= 30000", "2 <= d <= 3000", "2 <= k <= min(3000, n)", "1 <= c, plate <= d"],
    samples: &[
        Sample {
            input: "8 30 4 30\n7\n9\n7\n30\n2\n7\n9\n25\n",
            output: "5\n",
        },
        Sample {
            input: "8 50 4 7\n2\n7\n9\n25\n7\n9\n7\n30\n",
            output: "4\n",
        },
    ],
};

#[derive(Debug, Clone)]
pub struct Input {
    pub kinds: usize,
    pub window: usize,
    pub coupon: usize,
    pub plates: Vec<usize>,
}

impl Template for RotatingSushi {
    type Input = Input;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let n = sc.next_in("n", 2..=30_000usize)?;
        let kinds = sc.next_in("d", 2..=3000usize)?;
        let window = sc.next_in("k", 2..=3000usize.min(n))?;
        let coupon = sc.next_in("c", 1..=kinds)?;
        let plates = sc.values_in("plate", n, 1..=kinds)?;
        Ok(Input {
            kinds,
            window,
            coupon,
            plates,
        })
    }

    fn solve(&self, input: &Input) -> usize {
        let n = input.plates.len();
        let mut eaten = vec![0usize; input.kinds + 1];
        let mut distinct = 0;
        let at = |i: usize| input.plates[i % n];
        for i in 0..input.window {
            eaten[at(i)] += 1;
            if eaten[at(i)] == 1 {
                distinct += 1;
            }
        }
        let mut best = 0;
        for start in 0..n {
            let bonus = usize::from(eaten[input.coupon] == 0);
            best = best.max(distinct + bonus);
            // slide: drop plate `start`, take plate `start + window`
            eaten[at(start)] -= 1;
            if eaten[at(start)] == 0 {
                distinct -= 1;
            }
            let next = at(start + input.window);
            eaten[next] += 1;
            if eaten[next] == 1 {
                distinct += 1;
            }
        }
        best
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
