//! Cantor set approximations: `-` for kept segments, spaces for removed
//! ones, one line per order `n` until end of input.

use crate::templates::prelude::*;

pub struct CantorSet;

static INFO: TemplateInfo = TemplateInfo {
    id: "4779",
    title: "Cantor set",
    category: Category::DivideAndConquer,
    input: &[Field::int("n").until_end()],
    output: &[Field::line("approximation").until_end()],
    constraints: &["0 <= n <= 12"],
    samples: &[Sample {
        input: "0\n1\n3\n2\n",
        output: "-\n- -\n- -   - -         - -   - -\n- -   - -\n",
    }],
};

fn cantor(line: &mut [u8]) {
    if line.len() < 3 {
        return;
    }
    let third = line.len() / 3;
    line[third..2 * third].fill(b' ');
    cantor(&mut line[..third]);
    cantor(&mut line[2 * third..]);
}

impl Template for CantorSet {
    type Input = Vec<u32>;
    type Output = Vec<String>;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<u32>, InputError> {
        let mut orders = Vec::new();
        while sc.has_more() {
            orders.push(sc.next_in("n", 0..=12u32)?);
        }
        Ok(orders)
    }

    fn solve(&self, orders: &Vec<u32>) -> Vec<String> {
        orders
            .iter()
            .map(|&n| {
                let mut line = vec![b'-'; 3usize.pow(n)];
                cantor(&mut line);
                String::from_utf8_lossy(&line).into_owned()
            })
            .collect()
    }

    fn render(&self, output: &Vec<String>, out: &mut String) {
        for line in output {
            out.push_str(line);
            out.push('\n');
        }
    }
}
