//! Bounded Sieve of Eratosthenes.
//!
//! Pure computation with no dependencies on the rest of the crate; the
//! upper bound exists only to cap the marking array allocation.

use thiserror::Error;

/// Largest accepted bound. The marking array is `limit + 1` bytes, so
/// this caps a single request at ~1MB.
pub const MAX_LIMIT: i64 = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SieveError {
    #[error("Limit cannot exceed {MAX_LIMIT}")]
    LimitExceeded { limit: i64 },
}

/// Returns every prime `<= limit` in ascending order.
///
/// Bounds below 2 yield an empty vec rather than an error; only a
/// limit above [`MAX_LIMIT`] is rejected.
pub fn find_primes(limit: i64) -> Result<Vec<u32>, SieveError> {
    if limit > MAX_LIMIT {
        return Err(SieveError::LimitExceeded { limit });
    }

    if limit < 2 {
        return Ok(Vec::new());
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let limit = limit as usize;

    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2;
    while p * p <= limit {
        if is_prime[p] {
            // Smaller multiples were already struck out by smaller
            // prime factors, so marking starts at p*p.
            let mut i = p * p;
            while i <= limit {
                is_prime[i] = false;
                i += p;
            }
        }
        p += 1;
    }

    #[allow(clippy::cast_possible_truncation)]
    let primes = is_prime
        .iter()
        .enumerate()
        .filter(|&(_, &prime)| prime)
        .map(|(i, _)| i as u32)
        .collect();

    Ok(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_below_two_are_empty() {
        assert_eq!(find_primes(1).unwrap(), Vec::<u32>::new());
        assert_eq!(find_primes(0).unwrap(), Vec::<u32>::new());
        assert_eq!(find_primes(-5).unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_known_sequences() {
        assert_eq!(find_primes(2).unwrap(), vec![2]);
        assert_eq!(find_primes(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(
            find_primes(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_hundred_has_25_primes() {
        assert_eq!(find_primes(100).unwrap().len(), 25);
    }

    #[test]
    fn test_limit_is_inclusive() {
        let primes = find_primes(97).unwrap();
        assert_eq!(primes.last(), Some(&97));
    }

    #[test]
    fn test_over_limit_rejected() {
        assert_eq!(
            find_primes(1_000_001),
            Err(SieveError::LimitExceeded { limit: 1_000_001 })
        );
        assert!(find_primes(MAX_LIMIT).is_ok());
    }

    #[test]
    fn test_output_is_strictly_ascending_and_prime() {
        let primes = find_primes(1000).unwrap();
        assert!(primes.windows(2).all(|w| w[0] < w[1]));

        let is_prime = |n: u32| n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
        assert!(primes.iter().all(|&p| is_prime(p)));

        // No prime below the bound is omitted.
        let expected = (2..=1000).filter(|&n| is_prime(n)).count();
        assert_eq!(primes.len(), expected);
    }
}
