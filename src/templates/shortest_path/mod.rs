//! All-pairs and single-source shortest paths.

mod hide_and_seek;
mod kevin_bacon;
mod party;
mod reachability;

pub use hide_and_seek::HideAndSeek;
pub use kevin_bacon::KevinBacon;
pub use party::Party;
pub use reachability::Reachability;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(Reachability),
        Box::new(HideAndSeek),
        Box::new(Party),
        Box::new(KevinBacon),
    ]
}
