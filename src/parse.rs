//! The public prefix-parsing entry points.

use crate::convert;
use crate::error::{Error, ErrorCode, Result};
use crate::read::is_whitespace;
use crate::scan;

/// A floating-point value parsed from the front of an input, together with
/// the scan cursor.
///
/// `len` is the number of bytes consumed, counted from the start of the
/// input and including any leading whitespace the scanner skipped. Slicing
/// the input at `len` therefore yields exactly the text the scanner did not
/// consume, which is where a subsequent scan must begin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parsed {
    /// The parsed value.
    pub value: f64,
    /// The scan cursor: offset of the first byte not consumed.
    pub len: usize,
}

/// Parse the longest floating-point literal at the front of `input`.
///
/// ```
/// let parsed = floatscan::from_str_prefix("29.53 remainder").unwrap();
/// assert_eq!(parsed.value, 29.53);
/// assert_eq!(&"29.53 remainder"[parsed.len..], " remainder");
/// ```
///
/// # Errors
///
/// Fails if no prefix of `input` forms a floating-point literal. The error
/// reports where the scan gave up; the cursor is considered not to have
/// advanced.
pub fn from_str_prefix(input: &str) -> Result<Parsed> {
    from_slice_prefix(input.as_bytes())
}

/// Parse the longest floating-point literal at the front of a byte slice.
///
/// Identical to [`from_str_prefix`] except that the input does not need to
/// be UTF-8; the literal grammar is pure ASCII.
pub fn from_slice_prefix(input: &[u8]) -> Result<Parsed> {
    match scan::scan_prefix(input) {
        Some(prefix) => Ok(Parsed {
            value: convert::to_f64(input, &prefix),
            len: prefix.end,
        }),
        None => Err(no_conversion(input)),
    }
}

/// Parse with the `strtod` convention: no error channel, unparseable input
/// yields `0.0` with a cursor that has not advanced.
///
/// ```
/// assert_eq!(floatscan::from_str_lossy("12.5no digits here"), (12.5, 4));
/// assert_eq!(floatscan::from_str_lossy("no digits here"), (0.0, 0));
/// ```
pub fn from_str_lossy(input: &str) -> (f64, usize) {
    from_slice_lossy(input.as_bytes())
}

/// Byte-slice form of [`from_str_lossy`].
pub fn from_slice_lossy(input: &[u8]) -> (f64, usize) {
    match from_slice_prefix(input) {
        Ok(parsed) => (parsed.value, parsed.len),
        Err(_) => (0.0, 0),
    }
}

/// Extract two sequential floating-point values from one string.
///
/// The first scan starts at the beginning of `input`; the second starts
/// exactly where the first stopped. Both scans follow the lossy convention,
/// so a missing number comes back as `0.0` rather than an error.
///
/// ```
/// assert_eq!(floatscan::extract_pair("365.24 29.53"), (365.24, 29.53));
/// // The first scan stops at the second decimal point.
/// assert_eq!(floatscan::extract_pair("365.24.1.1 29.53"), (365.24, 0.1));
/// ```
pub fn extract_pair(input: &str) -> (f64, f64) {
    let (value1, cursor) = from_str_lossy(input);
    let (value2, _) = from_str_lossy(&input[cursor..]);
    (value1, value2)
}

fn no_conversion(input: &[u8]) -> Error {
    let offset = input
        .iter()
        .position(|byte| !is_whitespace(*byte))
        .unwrap_or(input.len());
    let code = if offset == input.len() {
        ErrorCode::EmptyInput
    } else {
        ErrorCode::NoConversion
    };
    Error::new(code, offset)
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Parsed;
    use core::fmt;
    use serde::de::{self, MapAccess, SeqAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    const NAME: &str = "Parsed";
    const FIELDS: &[&str] = &["value", "len"];

    impl Serialize for Parsed {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct(NAME, 2)?;
            state.serialize_field("value", &self.value)?;
            state.serialize_field("len", &self.len)?;
            state.end()
        }
    }

    impl<'de> Deserialize<'de> for Parsed {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_struct(NAME, FIELDS, ParsedVisitor)
        }
    }

    struct ParsedVisitor;

    impl<'de> Visitor<'de> for ParsedVisitor {
        type Value = Parsed;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a parsed prefix")
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Parsed, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let value = match seq.next_element()? {
                Some(value) => value,
                None => return Err(de::Error::invalid_length(0, &self)),
            };
            let len = match seq.next_element()? {
                Some(len) => len,
                None => return Err(de::Error::invalid_length(1, &self)),
            };
            Ok(Parsed { value, len })
        }

        fn visit_map<A>(self, mut map: A) -> Result<Parsed, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut value: Option<f64> = None;
            let mut len: Option<usize> = None;
            while let Some(key) = map.next_key::<&str>()? {
                match key {
                    "value" => {
                        if value.is_some() {
                            return Err(de::Error::duplicate_field("value"));
                        }
                        value = Some(map.next_value()?);
                    }
                    "len" => {
                        if len.is_some() {
                            return Err(de::Error::duplicate_field("len"));
                        }
                        len = Some(map.next_value()?);
                    }
                    field => return Err(de::Error::unknown_field(field, FIELDS)),
                }
            }
            match (value, len) {
                (Some(value), Some(len)) => Ok(Parsed { value, len }),
                (None, _) => Err(de::Error::missing_field("value")),
                (_, None) => Err(de::Error::missing_field("len")),
            }
        }
    }
}
