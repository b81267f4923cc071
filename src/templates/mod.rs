//! Built-in templates, one sub-module per category.
//!
//! Each category module exposes its template types and a `templates()`
//! constructor; [`builtin`] gathers all of them for the catalog.

use crate::traits::DynTemplate;

/// Everything a template file needs.
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::error::InputError;
    pub use crate::grid::Grid;
    pub use crate::scanner::Scanner;
    pub use crate::traits::{Field, Sample, Template, TemplateInfo};
    pub use crate::utils::push_line;
}

pub mod backtracking;
pub mod binary_search;
pub mod bit_mask;
pub mod bruteforcing;
pub mod data_structures;
pub mod divide_and_conquer;
pub mod dp;
pub mod eratosthenes;
pub mod graph_theory;
pub mod graph_traversal;
pub mod greedy;
pub mod implementation;
pub mod math;
pub mod parametric_search;
pub mod prefix_sum;
pub mod shortest_path;
pub mod sorting;
pub mod string;
pub mod tree;

/// Every built-in template, in no particular order.
pub fn builtin() -> Vec<Box<dyn DynTemplate>> {
    let groups: [fn() -> Vec<Box<dyn DynTemplate>>; 19] = [
        binary_search::templates,
        bit_mask::templates,
        bruteforcing::templates,
        backtracking::templates,
        data_structures::templates,
        dp::templates,
        divide_and_conquer::templates,
        eratosthenes::templates,
        graph_theory::templates,
        graph_traversal::templates,
        greedy::templates,
        implementation::templates,
        math::templates,
        parametric_search::templates,
        prefix_sum::templates,
        shortest_path::templates,
        sorting::templates,
        string::templates,
        tree::templates,
    ];
    groups.iter().flat_map(|group| group()).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::builtin;
    use crate::category::Category;

    #[test]
    fn ids_are_unique_and_numeric() {
        let all = builtin();
        let ids: HashSet<_> = all.iter().map(|t| t.info().id).collect();
        assert_eq!(ids.len(), all.len());
        assert!(all.iter().all(|t| t.info().id.parse::<u32>().is_ok()));
    }

    #[test]
    fn category_sizes() {
        let all = builtin();
        let count = |c: Category| all.iter().filter(|t| t.info().category == c).count();
        assert_eq!(count(Category::Implementation), 35);
        assert_eq!(count(Category::GraphTraversal), 11);
        assert_eq!(count(Category::Sorting), 10);
        assert_eq!(count(Category::Tree), 10);
        assert_eq!(count(Category::ParametricSearch), 1);
    }
}
