//! Subset enumeration with bit masks.

mod teaching_letters;

pub use teaching_letters::TeachingLetters;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![Box::new(TeachingLetters)]
}
