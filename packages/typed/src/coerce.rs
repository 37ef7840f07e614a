//! Coercion from raw segments to primitive types.
//!
//! One parse routine per family (signed, unsigned, float), expanded into
//! thin per-width impls by macro. The width only affects the final
//! narrowing check, never the scan.

use crate::error::Error;
use crate::literal;

/// Types that can be coerced from a single path segment.
///
/// Numeric impls use the prefix-parse policy: the longest well-formed
/// leading literal wins and trailing garbage is ignored, so `"5aaaa"`
/// coerces to `5`. `bool` and `String` instead consider the whole segment.
pub trait FromSegment: Sized {
    fn from_segment(segment: &str) -> Result<Self, Error>;
}

impl FromSegment for String {
    fn from_segment(segment: &str) -> Result<Self, Error> {
        Ok(segment.to_string())
    }
}

/// Whole-segment match, ASCII case-insensitive: `1`, `t`, `true` and
/// `0`, `f`, `false`.
impl FromSegment for bool {
    fn from_segment(segment: &str) -> Result<Self, Error> {
        if segment == "1" || segment.eq_ignore_ascii_case("t") || segment.eq_ignore_ascii_case("true")
        {
            return Ok(true);
        }
        if segment == "0" || segment.eq_ignore_ascii_case("f") || segment.eq_ignore_ascii_case("false")
        {
            return Ok(false);
        }
        Err(Error::conversion(segment, "bool"))
    }
}

macro_rules! from_segment_int {
    ($wide:ty, $wide128:ty, $signed:expr => $($t:ty),* $(,)?) => {$(
        impl FromSegment for $t {
            fn from_segment(segment: &str) -> Result<Self, Error> {
                let fail = || Error::conversion(segment, stringify!($t));
                let lit = literal::int_literal(segment, $signed).ok_or_else(fail)?;
                if lit.contains('.') {
                    // Fractional literal: truncate toward zero, then narrow
                    // from 128 bits. Comparing against `MAX as f64` (or
                    // casting straight to the target) is inexact at the
                    // 64-bit limits, where the cast saturates.
                    let value = lit.parse::<f64>().map_err(|_| fail())?.trunc();
                    <$t>::try_from(value as $wide128).map_err(|_| fail())
                } else {
                    let wide = lit.parse::<$wide>().map_err(|_| fail())?;
                    <$t>::try_from(wide).map_err(|_| fail())
                }
            }
        }
    )*};
}

from_segment_int!(i64, i128, true => i8, i16, i32, i64);
from_segment_int!(u64, u128, false => u8, u16, u32, u64);

macro_rules! from_segment_float {
    ($($t:ty),* $(,)?) => {$(
        impl FromSegment for $t {
            fn from_segment(segment: &str) -> Result<Self, Error> {
                let fail = || Error::conversion(segment, stringify!($t));
                let lit = literal::float_literal(segment).ok_or_else(fail)?;
                let value = lit.parse::<$t>().map_err(|_| fail())?;
                // The literal itself is finite, so an infinite result
                // means the value overflowed this width.
                if !value.is_finite() {
                    return Err(fail());
                }
                Ok(value)
            }
        }
    )*};
}

from_segment_float!(f32, f64);
