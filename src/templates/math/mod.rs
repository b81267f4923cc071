//! Number theory and plane geometry.

mod divisor_sums;
mod egyptian_fractions;
mod euclid;
mod parallelogram;
mod repunit_gcd;

pub use divisor_sums::DivisorSums;
pub use egyptian_fractions::EgyptianFractions;
pub use euclid::Euclid;
pub use parallelogram::Parallelogram;
pub use repunit_gcd::RepunitGcd;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(EgyptianFractions),
        Box::new(Parallelogram),
        Box::new(DivisorSums),
        Box::new(RepunitGcd),
        Box::new(Euclid),
    ]
}
