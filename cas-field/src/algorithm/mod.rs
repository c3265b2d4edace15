//! Number-theoretic helpers on arbitrary-precision integers.

pub mod gcd;
pub mod prime;

pub use gcd::{gcd, lcm};
pub use prime::factorize;
