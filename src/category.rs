//! The fixed set of algorithmic categories templates are grouped under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Algorithmic topic a template belongs to.
///
/// The textual form is the snake_case identifier used in configuration
/// files, on the command line and by [`Catalog::list_templates`](crate::Catalog::list_templates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BinarySearch,
    BitMask,
    Bruteforcing,
    DataStructures,
    Dp,
    GraphTraversal,
    GraphTheory,
    Greedy,
    Implementation,
    Math,
    PrefixSum,
    ShortestPath,
    Sorting,
    String,
    Tree,
    DivideAndConquer,
    Eratosthenes,
    ParametricSearch,
    Backtracking,
}

impl Category {
    pub const ALL: [Category; 19] = [
        Category::BinarySearch,
        Category::BitMask,
        Category::Bruteforcing,
        Category::DataStructures,
        Category::Dp,
        Category::GraphTraversal,
        Category::GraphTheory,
        Category::Greedy,
        Category::Implementation,
        Category::Math,
        Category::PrefixSum,
        Category::ShortestPath,
        Category::Sorting,
        Category::String,
        Category::Tree,
        Category::DivideAndConquer,
        Category::Eratosthenes,
        Category::ParametricSearch,
        Category::Backtracking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::BinarySearch => "binary_search",
            Category::BitMask => "bit_mask",
            Category::Bruteforcing => "bruteforcing",
            Category::DataStructures => "data_structures",
            Category::Dp => "dp",
            Category::GraphTraversal => "graph_traversal",
            Category::GraphTheory => "graph_theory",
            Category::Greedy => "greedy",
            Category::Implementation => "implementation",
            Category::Math => "math",
            Category::PrefixSum => "prefix_sum",
            Category::ShortestPath => "shortest_path",
            Category::Sorting => "sorting",
            Category::String => "string",
            Category::Tree => "tree",
            Category::DivideAndConquer => "divide_and_conquer",
            Category::Eratosthenes => "eratosthenes",
            Category::ParametricSearch => "parametric_search",
            Category::Backtracking => "backtracking",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn serde_matches_display() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{c}\""));
        }
    }

    #[test]
    fn unknown_identifier() {
        let err = "dynamic_programming".parse::<Category>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref s) if s == "dynamic_programming"));
    }
}
