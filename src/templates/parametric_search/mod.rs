//! Binary search over the answer of a monotone feasibility test.

mod lan_cables;

pub use lan_cables::LanCables;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![Box::new(LanCables)]
}
