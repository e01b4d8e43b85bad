//! Parse a leading floating-point literal from text and report where scanning
//! stopped.
//!
//! This crate provides the classic C `strtod` contract in a pure-functional
//! shape: scan the longest prefix of the input that forms a valid decimal
//! floating-point literal, convert it to an `f64`, and return the value
//! together with the byte offset of the first character not consumed. That
//! offset is the *scan cursor*: handing the remainder of the input back to the
//! parser extracts the next number, which is how several values are pulled out
//! of one string sequentially.
//!
//! ```
//! let first = floatscan::from_str_prefix("365.24.1.1 29.53").unwrap();
//! assert_eq!(first.value, 365.24);
//! assert_eq!(first.len, 6); // scanning stopped at the second `.`
//!
//! let second = floatscan::from_str_prefix(&"365.24.1.1 29.53"[first.len..]).unwrap();
//! assert_eq!(second.value, 0.1);
//! ```
//!
//! # Grammar
//!
//! Optional leading whitespace, an optional sign, then either a digit
//! sequence with at most one decimal point and an optional exponent, or one
//! of `inf`, `infinity`, `nan` (ASCII-case-insensitive). The match is greedy:
//! the scanner consumes the maximal run of characters that still forms a
//! valid literal, so `"3e+x"` parses as `3` with the cursor before the `e`
//! because `e+` alone cannot end a literal.
//!
//! # Lossy parsing
//!
//! [`from_str_prefix`] reports "no convertible prefix" as an [`Error`]. The
//! [`from_str_lossy`] variant reproduces the `strtod` convention instead:
//! unparseable input yields `0.0` and a cursor that has not advanced, so it
//! always returns a result. [`extract_pair`] builds on the lossy form to pull
//! two numbers out of one string the way the original C idiom does.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod convert;
mod error;
mod fmt;
mod parse;
mod read;
mod scan;

pub use crate::error::{Error, ErrorCode, Result};
pub use crate::fmt::Fixed;
pub use crate::parse::{
    extract_pair, from_slice_lossy, from_slice_prefix, from_str_lossy, from_str_prefix, Parsed,
};
