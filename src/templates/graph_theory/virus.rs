//! Computers infected through the network from computer 1, excluding itself.

use crate::templates::prelude::*;

pub struct Virus;

static INFO: TemplateInfo = TemplateInfo {
    id: "2606",
    title: "Virus",
    category: Category::GraphTheory,
    input: &[Field::int("n"), Field::int("k"), Field::int("link").repeat("2 * k")],
    output: &[Field::int("infected")],
    constraints: &["1 <= n <= 100", "0 <= k <= n * (n - 1) / 2", "1 <= link endpoints <= n"],
    samples: &[Sample {
        input: "7\n6\n1 2\n2 3\n1 5\n5 2\n5 6\n4 7\n",
        output: "4\n",
    }],
};

impl Template for Virus {
    type Input = Vec<Vec<usize>>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Vec<Vec<usize>>, InputError> {
        let n = sc.next_in("n", 1..=100usize)?;
        let k = sc.next_in("k", 0..=n * (n - 1) / 2)?;
        let mut adj = vec![Vec::new(); n + 1];
        for _ in 0..k {
            let a = sc.next_in("link", 1..=n)?;
            let b = sc.next_in("link", 1..=n)?;
            adj[a].push(b);
            adj[b].push(a);
        }
        Ok(adj)
    }

    fn solve(&self, adj: &Vec<Vec<usize>>) -> usize {
        let mut seen = vec![false; adj.len()];
        seen[1] = true;
        let mut stack = vec![1];
        let mut infected = 0;
        while let Some(v) = stack.pop() {
            for &w in &adj[v] {
                if !seen[w] {
                    seen[w] = true;
                    infected += 1;
                    stack.push(w);
                }
            }
        }
        infected
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}
