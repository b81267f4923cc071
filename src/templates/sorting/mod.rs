//! Order statistics and custom sort keys.

mod class_statistics;
mod coordinate_compression;
mod duty_balance;
mod frequency_sort;
mod ladder_swaps;
mod olympiad_medals;
mod pairing_quality;
mod rope_load;
mod train_seating;
mod trimmed_mean;

pub use class_statistics::ClassStatistics;
pub use coordinate_compression::CoordinateCompression;
pub use duty_balance::DutyBalance;
pub use frequency_sort::FrequencySort;
pub use ladder_swaps::LadderSwaps;
pub use olympiad_medals::OlympiadMedals;
pub use pairing_quality::PairingQuality;
pub use rope_load::RopeLoad;
pub use train_seating::TrainSeating;
pub use trimmed_mean::TrimmedMean;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(OlympiadMedals),
        Box::new(FrequencySort),
        Box::new(TrimmedMean),
        Box::new(CoordinateCompression),
        Box::new(PairingQuality),
        Box::new(RopeLoad),
        Box::new(DutyBalance),
        Box::new(LadderSwaps),
        Box::new(ClassStatistics),
        Box::new(TrainSeating),
    ]
}
