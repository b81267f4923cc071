//! Binary search over sorted data and over the answer space.

mod budget_cap;
mod card_count;
mod find_number;
mod pair_sum;
mod shoulder_link;
mod tree_cutting;

pub use budget_cap::BudgetCap;
pub use card_count::CardCount;
pub use find_number::FindNumber;
pub use pair_sum::PairSum;
pub use shoulder_link::ShoulderLink;
pub use tree_cutting::TreeCutting;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(FindNumber),
        Box::new(CardCount),
        Box::new(BudgetCap),
        Box::new(ShoulderLink),
        Box::new(TreeCutting),
        Box::new(PairSum),
    ]
}
