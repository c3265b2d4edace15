//! Functions to construct [`Integer`]s and format them in different radixes.

use rug::Integer;

/// The radix used when none is given.
pub const DEFAULT_RADIX: u32 = 10;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Returns the given radix if it is in the range `2..=36`, or [`DEFAULT_RADIX`] otherwise.
pub fn checked_radix(radix: u32) -> u32 {
    if (2..=36).contains(&radix) {
        radix
    } else {
        DEFAULT_RADIX
    }
}

/// Formats an integer in the given radix, using lowercase letters for digits above 9.
///
/// Radixes outside `2..=36` are formatted in [`DEFAULT_RADIX`].
pub fn fmt_radix(n: &Integer, radix: u32) -> String {
    // `checked_radix` keeps this in the range `to_string_radix` accepts
    n.to_string_radix(checked_radix(radix) as i32)
}
