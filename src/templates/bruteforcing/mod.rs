//! Exhaustive search over small, explicitly bounded domains.
//!
//! Each template declares the input bounds that keep its enumeration
//! tractable and rejects instances beyond them.

mod card_arrangement;
mod digit_rotation;
mod guessing_answers;
mod lucky_sums;
mod mbti_distance;
mod nm_and_k;
mod problem_setting;

pub use card_arrangement::CardArrangement;
pub use digit_rotation::DigitRotation;
pub use guessing_answers::GuessingAnswers;
pub use lucky_sums::LuckySums;
pub use mbti_distance::MbtiDistance;
pub use nm_and_k::NmAndK;
pub use problem_setting::ProblemSetting;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(ProblemSetting),
        Box::new(NmAndK),
        Box::new(GuessingAnswers),
        Box::new(CardArrangement),
        Box::new(DigitRotation),
        Box::new(LuckySums),
        Box::new(MbtiDistance),
    ]
}
