//! Conversion of a scanned literal to the nearest `f64`.
//!
//! The cheap common case is handled directly: when every significant digit
//! fits in a 64-bit mantissa and the scaled exponent stays within the range
//! where powers of ten are exactly representable, one multiply or divide
//! produces the correctly rounded value. Everything else is delegated to the
//! standard library's correctly rounded `FromStr` over the matched span,
//! which accepts every token the scanner can produce.

use crate::scan::{FloatToken, Prefix};
use core::str::{self, FromStr};

/// Convert a scanned prefix of `slice` to its `f64` value.
pub(crate) fn to_f64(slice: &[u8], prefix: &Prefix) -> f64 {
    let magnitude = match prefix.token {
        FloatToken::Infinity => f64::INFINITY,
        FloatToken::Nan => f64::NAN,
        FloatToken::Number {
            integer,
            fraction,
            exponent,
        } => match exact_number(integer, fraction, exponent) {
            Some(value) => value,
            // The span includes the sign, so return without re-applying it.
            None => return from_str_fallback(&slice[prefix.start..prefix.end]),
        },
    };
    if prefix.negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Fast path over the component spans. `None` means the value needs the
/// arbitrary-precision fallback.
fn exact_number(integer: &[u8], mut fraction: &[u8], exponent: i32) -> Option<f64> {
    // Trailing fraction zeroes contribute nothing but shift the exponent.
    while fraction.last() == Some(&b'0') {
        fraction = &fraction[..fraction.len() - 1];
    }

    let mantissa = parse_mantissa(integer, fraction)?;
    if mantissa == 0 {
        // Literal zero regardless of the exponent.
        return Some(0.0);
    }

    fast_path(mantissa, exponent.saturating_sub(into_i32(fraction.len())))
}

/// Accumulate the significant digits into a u64, or `None` on overflow.
fn parse_mantissa(integer: &[u8], fraction: &[u8]) -> Option<u64> {
    let mut value = 0u64;
    for &digit in integer.iter().chain(fraction) {
        value = value
            .checked_mul(10)?
            .checked_add((digit - b'0') as u64)?;
    }
    Some(value)
}

/// Powers of ten exactly representable in an f64.
const POW10: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Convert mantissa and power-of-ten exponent to an exact value.
///
/// Both operands are exact and IEEE multiplication/division rounds correctly,
/// so a single operation yields the nearest f64. Requires the mantissa to fit
/// in the 53-bit significand and the exponent to be an exact power of ten.
fn fast_path(mantissa: u64, exponent: i32) -> Option<f64> {
    if mantissa >> 53 != 0 {
        // Would require truncation of the mantissa.
        return None;
    }
    let value = mantissa as f64;
    if exponent == 0 {
        Some(value)
    } else if (1..=22).contains(&exponent) {
        Some(value * POW10[exponent as usize])
    } else if (-22..=-1).contains(&exponent) {
        Some(value / POW10[-exponent as usize])
    } else {
        None
    }
}

/// Correctly rounded conversion of the full matched span.
fn from_str_fallback(span: &[u8]) -> f64 {
    // The span is ASCII and matches f64's literal grammar, so neither
    // conversion can fail. Overflow gives inf, underflow gives zero.
    match str::from_utf8(span).ok().and_then(|s| f64::from_str(s).ok()) {
        Some(value) => value,
        None => f64::NAN,
    }
}

/// Clamp a span length into the i32 range without overflow. Comically long
/// digit strings saturate, which the fast-path range checks reject anyway.
fn into_i32(value: usize) -> i32 {
    if value > i32::MAX as usize {
        i32::MAX
    } else {
        value as i32
    }
}
