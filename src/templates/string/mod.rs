//! Text scanning, bracket matching and substring counting.

mod ac_language;
mod anagram_groups;
mod balanced_world;
mod distinct_substrings;
mod password_rules;

pub use ac_language::AcLanguage;
pub use anagram_groups::AnagramGroups;
pub use balanced_world::BalancedWorld;
pub use distinct_substrings::DistinctSubstrings;
pub use password_rules::PasswordRules;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(PasswordRules),
        Box::new(DistinctSubstrings),
        Box::new(AnagramGroups),
        Box::new(BalancedWorld),
        Box::new(AcLanguage),
    ]
}
