//! The person with the smallest Kevin Bacon number: the least total
//! acquaintance distance to everyone else. Ties go to the lower number.

use crate::templates::prelude::*;

pub struct KevinBacon;

static INFO: TemplateInfo = TemplateInfo {
    id: "1389",
    title: "Kevin Bacon's six degrees",
    category: Category::ShortestPath,
    input: &[Field::int("n"), Field::int("m"), Field::int("friends").repeat("2 * m")],
    output: &[Field::int("person")],
    constraints: &["2 <= n <= 100", "1 <= m <= 5000", "the friendship graph is connected"],
    samples: &[Sample {
        input: "5 5\n1 3\n1 4\n4 5\n4 3\n3 2\n",
        output: "3\n",
    }],
};

/// All-pairs hop counts; `None` is unreachable.
fn floyd_warshall(mut dist: Grid<Option<u32>>) -> Grid<Option<u32>> {
    let n = dist.rows();
    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[(i, k)] else { continue };
            for j in 0..n {
                if let Some(kj) = dist[(k, j)] {
                    if dist[(i, j)].map_or(true, |ij| ik + kj < ij) {
                        dist[(i, j)] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

impl Template for KevinBacon {
    type Input = Grid<Option<u32>>;
    type Output = usize;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Grid<Option<u32>>, InputError> {
        let n = sc.next_in("n", 2..=100usize)?;
        let m = sc.next_in("m", 1..=5000usize)?;
        let mut dist = Grid::new(n, n, None);
        for i in 0..n {
            dist[(i, i)] = Some(0);
        }
        for _ in 0..m {
            let a = sc.next_in("friends", 1..=n)? - 1;
            let b = sc.next_in("friends", 1..=n)? - 1;
            if a != b {
                dist[(a, b)] = Some(1);
                dist[(b, a)] = Some(1);
            }
        }
        let mut reached = vec![false; n];
        reached[0] = true;
        let mut stack = vec![0];
        while let Some(v) = stack.pop() {
            for w in 0..n {
                if dist[(v, w)] == Some(1) && !std::mem::replace(&mut reached[w], true) {
                    stack.push(w);
                }
            }
        }
        if let Some(v) = reached.iter().position(|&r| !r) {
            return Err(InputError::constraint(
                "friends",
                format!("person {} has no chain of friends to person 1", v + 1),
            ));
        }
        Ok(dist)
    }

    fn solve(&self, friends: &Grid<Option<u32>>) -> usize {
        let dist = floyd_warshall(friends.clone());
        let n = dist.rows();
        let bacon = |i: usize| dist.row(i).iter().flatten().sum::<u32>();
        (0..n).min_by_key(|&i| (bacon(i), i)).unwrap_or(0) + 1
    }

    fn render(&self, output: &usize, out: &mut String) {
        push_line(out, [output]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_graph_centre_wins() {
        let catalog = crate::Catalog::new();
        assert_eq!(catalog.run("1389", "3 2\n1 2\n2 3\n").unwrap(), "2\n");
        // ties resolve to the smaller number
        assert_eq!(catalog.run("1389", "2 1\n1 2\n").unwrap(), "1\n");
    }
}
