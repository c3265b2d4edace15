//! Greatest common divisor and least common multiple of positive integers.

use crate::error::{InvalidArgument, Requirement};
use rug::Integer;

/// Returns an error if the given integer is not strictly positive.
fn check_positive(n: &Integer) -> Result<(), InvalidArgument> {
    if n.cmp0().is_gt() {
        Ok(())
    } else {
        Err(InvalidArgument {
            value: n.clone(),
            requirement: Requirement::Positive,
        })
    }
}

/// Computes the greatest common divisor of two strictly positive integers.
pub fn gcd(a: &Integer, b: &Integer) -> Result<Integer, InvalidArgument> {
    check_positive(a)?;
    check_positive(b)?;
    Ok(Integer::from(a.gcd_ref(b)))
}

/// Computes the least common multiple of two strictly positive integers, as `a*b / gcd(a, b)`.
pub fn lcm(a: &Integer, b: &Integer) -> Result<Integer, InvalidArgument> {
    let gcd = gcd(a, b)?;
    Ok(Integer::from(a * b) / gcd)
}
