//! Rooted and unrooted trees: diameters, parents, ancestors, traversals.

mod bst_postorder;
mod diameter;
mod diameter_lists;
mod leaf_count;
mod lowest_ancestor;
mod node_distances;
mod parents;
mod rebuild_preorder;
mod traversals;
mod widest_level;

pub use bst_postorder::BstPostorder;
pub use diameter::Diameter;
pub use diameter_lists::DiameterLists;
pub use leaf_count::LeafCount;
pub use lowest_ancestor::LowestAncestor;
pub use node_distances::NodeDistances;
pub use parents::Parents;
pub use rebuild_preorder::RebuildPreorder;
pub use traversals::Traversals;
pub use widest_level::WidestLevel;

use std::collections::HashSet;

use crate::error::InputError;
use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(Diameter),
        Box::new(Parents),
        Box::new(LeafCount),
        Box::new(LowestAncestor),
        Box::new(DiameterLists),
        Box::new(NodeDistances),
        Box::new(Traversals),
        Box::new(WidestLevel),
        Box::new(RebuildPreorder),
        Box::new(BstPostorder),
    ]
}

/// Undirected tree with weighted edges over vertices `1..=n` (slot 0 unused).
#[derive(Debug, Clone)]
pub struct WeightedTree {
    adj: Vec<Vec<(usize, u64)>>,
}

impl WeightedTree {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n + 1],
        }
    }

    pub(crate) fn add_edge(&mut self, a: usize, b: usize, w: u64) {
        self.add_arc(a, b, w);
        self.add_arc(b, a, w);
    }

    /// One direction only, for inputs that list each edge from both ends.
    pub(crate) fn add_arc(&mut self, from: usize, to: usize, w: u64) {
        self.adj[from].push((to, w));
    }

    /// Require the arcs to describe one tree: each edge exactly once from
    /// both ends with the same weight, no loops, and everything connected.
    pub(crate) fn check_tree(&self, field: &'static str) -> Result<(), InputError> {
        let n = self.adj.len() - 1;
        // (low end, high end, weight, listed from the low end)
        let mut arcs = Vec::new();
        for (v, list) in self.adj.iter().enumerate() {
            for &(w, cost) in list {
                if v == w {
                    return Err(InputError::constraint(field, format!("loop at vertex {v}")));
                }
                arcs.push((v.min(w), v.max(w), cost, v < w));
            }
        }
        let mut ends = HashSet::with_capacity(arcs.len());
        if let Some(&(lo, hi, _, _)) = arcs.iter().find(|a| !ends.insert((a.0, a.1, a.3))) {
            return Err(InputError::constraint(field, format!("edge {lo}-{hi} repeated")));
        }
        arcs.sort_unstable();
        for pair in arcs.chunks(2) {
            let matched = matches!(pair, [a, b] if (a.0, a.1, a.2) == (b.0, b.1, b.2) && !a.3 && b.3);
            if !matched {
                let (lo, hi, _, _) = pair[0];
                return Err(InputError::constraint(
                    field,
                    format!("edge {lo}-{hi} is not listed the same way from both ends"),
                ));
            }
        }
        if arcs.len() != 2 * (n - 1) {
            return Err(InputError::constraint(
                field,
                format!("{} edges for {n} vertices", arcs.len() / 2),
            ));
        }
        if let Some(v) = self.distances(1).iter().skip(1).position(Option::is_none) {
            return Err(InputError::constraint(
                field,
                format!("vertex {} is not connected to vertex 1", v + 1),
            ));
        }
        Ok(())
    }

    /// Distance from `from` to every vertex; unreachable vertices stay `None`.
    pub(crate) fn distances(&self, from: usize) -> Vec<Option<u64>> {
        let mut dist = vec![None; self.adj.len()];
        dist[from] = Some(0);
        let mut stack = vec![from];
        while let Some(v) = stack.pop() {
            let Some(d) = dist[v] else { continue };
            for &(w, cost) in &self.adj[v] {
                if dist[w].is_none() {
                    dist[w] = Some(d + cost);
                    stack.push(w);
                }
            }
        }
        dist
    }

    /// Vertex farthest from `from` (the lowest-numbered on ties) and its distance.
    pub(crate) fn farthest(&self, from: usize) -> (usize, u64) {
        self.distances(from)
            .into_iter()
            .enumerate()
            .filter_map(|(v, d)| Some((v, d?)))
            .fold((from, 0), |best, (v, d)| if d > best.1 { (v, d) } else { best })
    }

    /// Longest path: the farthest vertex from any start is one end of it.
    pub(crate) fn diameter(&self, start: usize) -> u64 {
        let (end, _) = self.farthest(start);
        self.farthest(end).1
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedTree;
    use crate::error::InputError;

    #[test]
    fn tree_shape_checks() {
        let mut t = WeightedTree::new(3);
        t.add_edge(1, 2, 1);
        assert!(matches!(t.check_tree("edge"), Err(InputError::Constraint { .. })));
        t.add_edge(2, 3, 1);
        assert!(t.check_tree("edge").is_ok());
        t.add_edge(3, 2, 1);
        assert!(t.check_tree("edge").is_err());

        let mut one_way = WeightedTree::new(2);
        one_way.add_arc(1, 2, 5);
        one_way.add_arc(1, 2, 5);
        assert!(one_way.check_tree("list").is_err());

        let mut uneven = WeightedTree::new(2);
        uneven.add_arc(1, 2, 5);
        uneven.add_arc(2, 1, 6);
        assert!(uneven.check_tree("list").is_err());

        assert!(WeightedTree::new(1).check_tree("edge").is_ok());
    }

    #[test]
    fn diameter_of_a_spider() {
        let mut t = WeightedTree::new(5);
        t.add_edge(1, 2, 4);
        t.add_edge(1, 3, 1);
        t.add_edge(1, 4, 7);
        t.add_edge(4, 5, 1);
        assert_eq!(t.farthest(1), (5, 8));
        assert_eq!(t.diameter(3), 12);
        assert_eq!(t.distances(2)[5], Some(12));
    }
}
