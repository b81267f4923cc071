//! Direct simulations and bookkeeping problems.

mod array_restoration;
mod attendance;
mod ball_packing;
mod battle_order;
mod big_o_check;
mod binary_kingdom;
mod bovine_shuffle;
mod candy_sharing;
mod card_set;
mod chocolate_stealing;
mod clock_dance;
mod coloured_paper;
mod course_swap;
mod d_day;
mod eavesdropping;
mod ellipsis;
mod gpa;
mod homework_stack;
mod landslide;
mod morse_arithmetic;
mod odd_gcd_matching;
mod quality_check;
mod rating_decay;
mod repeat_window;
mod restaurant_order;
mod robot_walk;
mod rotating_sushi;
mod skill_combos;
mod sorted_runs;
mod stream_islands;
mod subarray_sum;
mod sum_guessing;
mod transparency;
mod wheel_of_fortune;
mod wooden_blocks;

pub use array_restoration::ArrayRestoration;
pub use attendance::Attendance;
pub use ball_packing::BallPacking;
pub use battle_order::BattleOrder;
pub use big_o_check::BigOCheck;
pub use binary_kingdom::BinaryKingdom;
pub use bovine_shuffle::BovineShuffle;
pub use candy_sharing::CandySharing;
pub use card_set::CardSet;
pub use chocolate_stealing::ChocolateStealing;
pub use clock_dance::ClockDance;
pub use coloured_paper::ColouredPaper;
pub use course_swap::CourseSwap;
pub use d_day::DDay;
pub use eavesdropping::Eavesdropping;
pub use ellipsis::Ellipsis;
pub use gpa::Gpa;
pub use homework_stack::HomeworkStack;
pub use landslide::Landslide;
pub use morse_arithmetic::MorseArithmetic;
pub use odd_gcd_matching::OddGcdMatching;
pub use quality_check::QualityCheck;
pub use rating_decay::RatingDecay;
pub use repeat_window::RepeatWindow;
pub use restaurant_order::RestaurantOrder;
pub use robot_walk::RobotWalk;
pub use rotating_sushi::RotatingSushi;
pub use skill_combos::SkillCombos;
pub use sorted_runs::SortedRuns;
pub use stream_islands::StreamIslands;
pub use subarray_sum::SubarraySum;
pub use sum_guessing::SumGuessing;
pub use transparency::Transparency;
pub use wheel_of_fortune::WheelOfFortune;
pub use wooden_blocks::WoodenBlocks;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(ArrayRestoration),
        Box::new(RestaurantOrder),
        Box::new(OddGcdMatching),
        Box::new(BigOCheck),
        Box::new(Gpa),
        Box::new(WoodenBlocks),
        Box::new(QualityCheck),
        Box::new(StreamIslands),
        Box::new(ClockDance),
        Box::new(RobotWalk),
        Box::new(Transparency),
        Box::new(SubarraySum),
        Box::new(Ellipsis),
        Box::new(ChocolateStealing),
        Box::new(RotatingSushi),
        Box::new(ColouredPaper),
        Box::new(Landslide),
        Box::new(CardSet),
        Box::new(CandySharing),
        Box::new(BallPacking),
        Box::new(DDay),
        Box::new(BovineShuffle),
        Box::new(BinaryKingdom),
        Box::new(HomeworkStack),
        Box::new(Attendance),
        Box::new(RepeatWindow),
        Box::new(CourseSwap),
        Box::new(RatingDecay),
        Box::new(SkillCombos),
        Box::new(WheelOfFortune),
        Box::new(BattleOrder),
        Box::new(SumGuessing),
        Box::new(SortedRuns),
        Box::new(Eavesdropping),
        Box::new(MorseArithmetic),
    ]
}
