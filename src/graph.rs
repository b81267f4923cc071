//! Adjacency-list helpers shared by graph and tree templates.
//!
//! Vertices are numbered `1..=n`; slot 0 of every list is unused.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use crate::error::InputError;
use crate::scanner::Scanner;

/// Single-source shortest paths over non-negative weights.
///
/// Unreachable vertices stay `None`.
pub(crate) fn dijkstra(adj: &[Vec<(usize, u64)>], source: usize) -> Vec<Option<u64>> {
    let mut dist = vec![None; adj.len()];
    dist[source] = Some(0);
    let mut heap = BinaryHeap::from([Reverse((0u64, source))]);
    while let Some(Reverse((d, v))) = heap.pop() {
        if dist[v].is_some_and(|best| d > best) {
            continue;
        }
        for &(w, cost) in &adj[v] {
            let nd = d + cost;
            if dist[w].map_or(true, |best| nd < best) {
                dist[w] = Some(nd);
                heap.push(Reverse((nd, w)));
            }
        }
    }
    dist
}

/// Vertices reachable from `source` along weighted arcs.
pub(crate) fn reachable(adj: &[Vec<(usize, u64)>], source: usize) -> Vec<bool> {
    let mut seen = vec![false; adj.len()];
    seen[source] = true;
    let mut stack = vec![source];
    while let Some(v) = stack.pop() {
        for &(w, _) in &adj[v] {
            if !std::mem::replace(&mut seen[w], true) {
                stack.push(w);
            }
        }
    }
    seen
}

/// Fails unless every vertex `1..reached.len()` was reached.
pub(crate) fn require_all_reached(field: &'static str, reached: &[bool]) -> Result<(), InputError> {
    match reached.iter().enumerate().skip(1).find(|(_, &r)| !r) {
        Some((v, _)) => Err(InputError::constraint(
            field,
            format!("vertex {v} is not connected to the rest"),
        )),
        None => Ok(()),
    }
}

/// Read `n - 1` undirected edges over `1..=n` into adjacency lists.
///
/// The edges must form a tree: no loops, no repeated edge, and every vertex
/// connected to vertex 1.
pub(crate) fn read_tree_edges(
    sc: &mut Scanner<'_>,
    field: &'static str,
    n: usize,
) -> Result<Vec<Vec<usize>>, InputError> {
    let mut adj = vec![Vec::new(); n + 1];
    let mut seen = HashSet::with_capacity(n);
    for _ in 1..n {
        let a = sc.next_in(field, 1..=n)?;
        let b = sc.next_in(field, 1..=n)?;
        if a == b {
            return Err(InputError::constraint(field, format!("loop at vertex {a}")));
        }
        if !seen.insert((a.min(b), a.max(b))) {
            return Err(InputError::constraint(field, format!("edge {a}-{b} repeated")));
        }
        adj[a].push(b);
        adj[b].push(a);
    }
    let (parent, _) = root_at(&adj, 1);
    let reached: Vec<bool> = (0..=n).map(|v| v == 1 || parent[v].is_some()).collect();
    require_all_reached(field, &reached)?;
    Ok(adj)
}

/// BFS from `root`: parent and depth of every vertex. The root and
/// unreached vertices have no parent.
pub(crate) fn root_at(adj: &[Vec<usize>], root: usize) -> (Vec<Option<usize>>, Vec<u32>) {
    let mut parent = vec![None; adj.len()];
    let mut depth = vec![0; adj.len()];
    let mut seen = vec![false; adj.len()];
    seen[root] = true;
    let mut queue = VecDeque::from([root]);
    while let Some(v) = queue.pop_front() {
        for &w in &adj[v] {
            if !std::mem::replace(&mut seen[w], true) {
                parent[w] = Some(v);
                depth[w] = depth[v] + 1;
                queue.push_back(w);
            }
        }
    }
    (parent, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dijkstra_prefers_cheaper_detour() {
        let adj = vec![vec![], vec![(2, 10), (3, 1)], vec![], vec![(2, 2)], vec![]];
        assert_eq!(dijkstra(&adj, 1), vec![None, Some(0), Some(3), Some(1), None]);
    }

    #[test]
    fn reachability_follows_arc_direction() {
        let adj = vec![vec![], vec![(2, 1)], vec![], vec![(1, 1)]];
        assert_eq!(reachable(&adj, 1), vec![false, true, true, false]);
        assert!(require_all_reached("road", &reachable(&adj, 3)).is_ok());
        assert!(require_all_reached("road", &reachable(&adj, 1)).is_err());
    }

    #[test]
    fn tree_edges_are_validated() {
        let read = |input: &str, n| read_tree_edges(&mut Scanner::new(input), "edge", n);
        assert!(read("1 2\n2 3\n", 3).is_ok());
        assert!(matches!(read("1 2\n1 2\n", 3), Err(InputError::Constraint { .. })));
        assert!(matches!(read("2 2\n1 3\n", 3), Err(InputError::Constraint { .. })));
        assert!(matches!(read("2 3\n3 4\n4 2\n", 4), Err(InputError::Constraint { .. })));
        assert!(read("", 1).is_ok());
    }

    #[test]
    fn rooting_records_depths() {
        let adj = vec![vec![], vec![2, 3], vec![1, 4], vec![1], vec![2]];
        let (parent, depth) = root_at(&adj, 1);
        assert_eq!(parent, vec![None, None, Some(1), Some(1), Some(2)]);
        assert_eq!(depth[4], 2);
    }
}
