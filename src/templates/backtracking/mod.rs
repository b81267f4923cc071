//! Exhaustive generation with backtracking.

mod nondecreasing_sequences;

pub use nondecreasing_sequences::NondecreasingSequences;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![Box::new(NondecreasingSequences)]
}
