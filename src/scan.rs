//! Longest-valid-prefix recognition of a floating-point literal.

use crate::read::Cursor;

/// The kind of literal found at the front of the input, broken into the
/// component spans the conversion step needs.
pub(crate) enum FloatToken<'a> {
    Number {
        /// Digits before the decimal point. May be empty (".5").
        integer: &'a [u8],
        /// Digits after the decimal point. May be empty ("5.").
        fraction: &'a [u8],
        /// Explicit exponent, saturated to the i32 range. Saturation is
        /// harmless: any exponent near i32::MAX overflows or underflows f64
        /// long before the difference matters.
        exponent: i32,
    },
    Infinity,
    Nan,
}

/// A successfully scanned prefix.
pub(crate) struct Prefix<'a> {
    pub(crate) token: FloatToken<'a>,
    pub(crate) negative: bool,
    /// Offset of the literal itself: after whitespace, including the sign.
    pub(crate) start: usize,
    /// The scan cursor: offset of the first byte not consumed.
    pub(crate) end: usize,
}

/// Scan the longest prefix of `slice` that forms a floating-point literal.
///
/// Returns `None` when no conversion can be performed, in which case the
/// caller must treat the cursor as not having advanced.
pub(crate) fn scan_prefix(slice: &[u8]) -> Option<Prefix> {
    let mut cursor = Cursor::new(slice);
    cursor.eat_whitespace();
    let start = cursor.byte_offset();

    let negative = match cursor.peek() {
        Some(b'-') => {
            cursor.bump();
            true
        }
        Some(b'+') => {
            cursor.bump();
            false
        }
        _ => false,
    };

    if cursor.eat_ignore_ascii_case(b"inf") {
        // "infinity" in full also matches; "infin" stops after "inf".
        cursor.eat_ignore_ascii_case(b"inity");
        return Some(Prefix {
            token: FloatToken::Infinity,
            negative,
            start,
            end: cursor.byte_offset(),
        });
    }
    if cursor.eat_ignore_ascii_case(b"nan") {
        return Some(Prefix {
            token: FloatToken::Nan,
            negative,
            start,
            end: cursor.byte_offset(),
        });
    }

    let integer = cursor.eat_digits();
    let mut fraction: &[u8] = &[];
    if cursor.eat_byte(b'.') {
        fraction = cursor.eat_digits();
    }
    if integer.is_empty() && fraction.is_empty() {
        // A sign or a lone decimal point is not a number.
        return None;
    }

    // An exponent marker only counts if at least one digit follows it.
    // Otherwise the literal ends before the marker: "3e+x" scans as "3".
    let mut exponent = 0i32;
    let mark = cursor.byte_offset();
    if cursor.eat_byte(b'e') || cursor.eat_byte(b'E') {
        let negative_exponent = match cursor.peek() {
            Some(b'-') => {
                cursor.bump();
                true
            }
            Some(b'+') => {
                cursor.bump();
                false
            }
            _ => false,
        };
        let digits = cursor.eat_digits();
        if digits.is_empty() {
            cursor.set_offset(mark);
        } else {
            for &digit in digits {
                exponent = exponent
                    .saturating_mul(10)
                    .saturating_add((digit - b'0') as i32);
            }
            if negative_exponent {
                exponent = -exponent;
            }
        }
    }

    Some(Prefix {
        token: FloatToken::Number {
            integer,
            fraction,
            exponent,
        },
        negative,
        start,
        end: cursor.byte_offset(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn cursor_of(input: &str) -> usize {
        scan_prefix(input.as_bytes()).unwrap().end
    }

    #[test]
    fn stops_at_second_decimal_point() {
        assert_eq!(cursor_of("365.24.1.1 29.53"), 6);
        assert_eq!(cursor_of(".1.1 29.53"), 2);
    }

    #[test]
    fn exponent_marker_without_digits_is_not_consumed() {
        assert_eq!(cursor_of("3e"), 1);
        assert_eq!(cursor_of("3e+"), 1);
        assert_eq!(cursor_of("3e+5"), 4);
        assert_eq!(cursor_of("3E-5"), 4);
    }

    #[test]
    fn sign_alone_is_no_conversion() {
        assert!(scan_prefix(b"+").is_none());
        assert!(scan_prefix(b"-x").is_none());
        assert!(scan_prefix(b".").is_none());
        assert!(scan_prefix(b"+.e3").is_none());
        assert!(scan_prefix(b"").is_none());
    }

    #[test]
    fn whitespace_is_consumed_before_the_literal() {
        let prefix = scan_prefix(b" \t42xyz").unwrap();
        assert_eq!(prefix.start, 2);
        assert_eq!(prefix.end, 4);
    }

    #[test]
    fn named_specials() {
        assert_eq!(cursor_of("inf"), 3);
        assert_eq!(cursor_of("Infinity!"), 8);
        assert_eq!(cursor_of("-infx"), 4);
        assert_eq!(cursor_of("NaN"), 3);
        assert!(matches!(
            scan_prefix(b"nan").unwrap().token,
            FloatToken::Nan
        ));
    }

    #[test]
    fn exponent_saturates_instead_of_wrapping() {
        let prefix = scan_prefix(b"1e99999999999999999999").unwrap();
        match prefix.token {
            FloatToken::Number { exponent, .. } => assert_eq!(exponent, i32::MAX),
            _ => panic!("expected a number"),
        }
    }
}
