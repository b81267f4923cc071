//! Prime tables from the sieve of Eratosthenes.

mod bertrand_postulate;
mod consecutive_primes;
mod kth_erased;
mod prime_palindrome;
mod primes_in_range;

pub use bertrand_postulate::BertrandPostulate;
pub use consecutive_primes::ConsecutivePrimes;
pub use kth_erased::KthErased;
pub use prime_palindrome::PrimePalindrome;
pub use primes_in_range::PrimesInRange;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(PrimesInRange),
        Box::new(KthErased),
        Box::new(BertrandPostulate),
        Box::new(ConsecutivePrimes),
        Box::new(PrimePalindrome),
    ]
}
