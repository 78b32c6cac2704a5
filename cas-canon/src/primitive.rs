//! Functions to construct the [`Integer`]s and [`Float`]s stored in [`Number`] nodes.
//!
//! [`Number`]: crate::tree::kind::Number

use rug::{Assign, Float, Integer};

/// The number of digits of precision to use for [`Float`] numbers.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}
