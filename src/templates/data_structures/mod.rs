//! Stacks, heaps, ordered sets and maps.

mod card_merge;
mod group_master;
mod keylogger;
mod nth_largest;
mod number_cards;
mod parenthesis_insertion;
mod parenthesis_string;
mod password_lookup;
mod stack_commands;

pub use card_merge::CardMerge;
pub use group_master::GroupMaster;
pub use keylogger::Keylogger;
pub use nth_largest::NthLargest;
pub use number_cards::NumberCards;
pub use parenthesis_insertion::ParenthesisInsertion;
pub use parenthesis_string::ParenthesisString;
pub use password_lookup::PasswordLookup;
pub use stack_commands::{Command, StackCommands};

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(GroupMaster),
        Box::new(Keylogger),
        Box::new(NumberCards),
        Box::new(StackCommands),
        Box::new(ParenthesisInsertion),
        Box::new(CardMerge),
        Box::new(PasswordLookup),
        Box::new(NthLargest),
        Box::new(ParenthesisString),
    ]
}
