//! Dynamic programming over one-dimensional recurrences.

mod decreasing_subsequence;
mod four_squares;
mod pascal_triangle;
mod sum_of_123;

pub use decreasing_subsequence::DecreasingSubsequence;
pub use four_squares::FourSquares;
pub use pascal_triangle::PascalTriangle;
pub use sum_of_123::SumOf123;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(FourSquares),
        Box::new(PascalTriangle),
        Box::new(DecreasingSubsequence),
        Box::new(SumOf123),
    ]
}
