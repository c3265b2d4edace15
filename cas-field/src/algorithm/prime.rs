//! Prime factorization by trial division.

use crate::{error::{InvalidArgument, Requirement}, primitive::int};
use log::debug;
use once_cell::sync::Lazy;
use rug::Integer;

/// Trial division uses every prime up to and including this limit.
pub const SIEVE_LIMIT: u32 = 1 << 24;

/// The primes used for trial division, computed on first use.
static PRIMES: Lazy<Vec<u32>> = Lazy::new(|| {
    let primes = primes_up_to(SIEVE_LIMIT);
    debug!("sieved {} primes up to {}", primes.len(), SIEVE_LIMIT);
    primes
});

/// Returns all primes up to and including `limit`, in ascending order, using the sieve of
/// Eratosthenes.
///
/// Only odd numbers are stored in the sieve; entry `i` stands for `2i + 3`.
pub fn primes_up_to(limit: u32) -> Vec<u32> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    let index = |n: usize| (n - 3) / 2;
    let mut composite = vec![false; limit.saturating_sub(1) / 2];
    let mut primes = vec![2];
    for n in (3..=limit).step_by(2) {
        if composite[index(n)] {
            continue;
        }

        primes.push(n as u32);
        // odd multiples only, starting at n²
        let mut multiple = n * n;
        while multiple <= limit {
            composite[index(multiple)] = true;
            multiple += 2 * n;
        }
    }

    primes
}

/// Factorizes an integer larger than 1 into primes, in ascending order and with multiplicity.
///
/// Only primes up to [`SIEVE_LIMIT`] are tried. If the remaining cofactor has no divisor among
/// them, it is returned as the last element, and it may not be prime if it is larger than
/// `SIEVE_LIMIT` squared.
pub fn factorize(n: &Integer) -> Result<Vec<Integer>, InvalidArgument> {
    if *n <= 1 {
        return Err(InvalidArgument {
            value: n.clone(),
            requirement: Requirement::GreaterThanOne,
        });
    }

    let mut rest = n.clone();
    let mut factors = Vec::new();
    for &prime in PRIMES.iter() {
        // no factor of `rest` can be smaller than this prime, so `rest` is prime or 1
        if rest < u64::from(prime) * u64::from(prime) {
            break;
        }

        while rest.is_divisible_u(prime) {
            rest /= prime;
            factors.push(int(prime));
        }
    }

    if rest != 1 {
        factors.push(rest);
    }

    Ok(factors)
}
