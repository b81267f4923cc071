//! Sieve of Eratosthenes over an explicit bound.
//!
//! Composites are marked by walking the multiples of each prime starting at
//! the prime itself, so the walk can also report the order in which numbers
//! are struck out (see [`Sieve::erasure_order`]).

/// Primality table for `0..=bound`.
#[derive(Debug, Clone)]
pub struct Sieve {
    composite: Vec<bool>,
}

impl Sieve {
    pub fn new(bound: usize) -> Self {
        let mut composite = vec![false; bound + 1];
        composite[0] = true;
        if bound >= 1 {
            composite[1] = true;
        }
        let mut p = 2;
        while p * p <= bound {
            if !composite[p] {
                let mut m = p * p;
                while m <= bound {
                    composite[m] = true;
                    m += p;
                }
            }
            p += 1;
        }
        Self { composite }
    }

    /// Largest number covered.
    pub fn bound(&self) -> usize {
        self.composite.len() - 1
    }

    /// Primality of `n`; numbers beyond the bound report `false`.
    #[inline]
    pub fn is_prime(&self, n: usize) -> bool {
        self.composite.get(n).is_some_and(|&c| !c)
    }

    /// All primes up to the bound, ascending.
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.composite
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (!c).then_some(i))
    }

    /// Numbers `2..=bound` in the order the textbook sieve erases them: each
    /// prime strikes itself and then its not-yet-erased multiples.
    pub fn erasure_order(bound: usize) -> Vec<usize> {
        let mut erased = vec![false; bound + 1];
        let mut order = Vec::with_capacity(bound.saturating_sub(1));
        for p in 2..=bound {
            if erased[p] {
                continue;
            }
            let mut m = p;
            while m <= bound {
                if !erased[m] {
                    erased[m] = true;
                    order.push(m);
                }
                m += p;
            }
        }
        order
    }
}

/// Trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_below_hundred() {
        let s = Sieve::new(100);
        let primes: Vec<_> = s.primes().collect();
        assert_eq!(primes.len(), 25);
        assert_eq!(primes.first(), Some(&2));
        assert_eq!(primes.last(), Some(&97));
    }

    #[test]
    fn agrees_with_trial_division() {
        let s = Sieve::new(2000);
        for k in 0..=2000usize {
            assert_eq!(s.is_prime(k), is_prime(k as u64), "k={k}");
        }
        assert!(!s.is_prime(2001));
    }

    #[test]
    fn tiny_bounds() {
        assert_eq!(Sieve::new(0).primes().count(), 0);
        assert_eq!(Sieve::new(1).primes().count(), 0);
        assert_eq!(Sieve::new(2).primes().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn erasure_order_matches_hand_trace() {
        // 2 4 6 8 10 3 9 5 7
        assert_eq!(Sieve::erasure_order(10), vec![2, 4, 6, 8, 10, 3, 9, 5, 7]);
    }
}
