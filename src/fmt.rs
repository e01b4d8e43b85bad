//! Fixed-precision rendering of parsed values.

use core::fmt::{self, Display};

/// Display adapter that renders an `f64` in fixed decimal notation with an
/// exact number of fractional digits, the way C's `printf("%.*f")` does.
///
/// Finite values print with exactly `precision` digits after the decimal
/// point, correctly rounded, regardless of magnitude. Non-finite values
/// print as `inf`, `-inf` or `nan` in the C spelling, so a ratio that
/// divided by zero still renders without a panic.
///
/// ```
/// use floatscan::Fixed;
///
/// assert_eq!(Fixed::new(365.24, 6).to_string(), "365.240000");
/// assert_eq!(Fixed::new(365.24 / 29.53, 2).to_string(), "12.37");
/// assert_eq!(Fixed::new(f64::INFINITY, 2).to_string(), "inf");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fixed {
    value: f64,
    precision: usize,
}

impl Fixed {
    /// Render `value` with exactly `precision` fractional digits.
    pub fn new(value: f64, precision: usize) -> Self {
        Fixed { value, precision }
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.value.is_nan() {
            f.write_str("nan")
        } else if self.value.is_infinite() {
            f.write_str(if self.value < 0.0 { "-inf" } else { "inf" })
        } else {
            write!(f, "{:.*}", self.precision, self.value)
        }
    }
}
