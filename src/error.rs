//! When no convertible prefix can be found.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents the one way prefix parsing can fail: the input does
/// not begin with anything resembling a floating-point literal.
pub struct Error {
    /// This `Box` keeps the size of `Error` down to one word so that
    /// `Result<Parsed>` stays cheap to pass around.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `floatscan::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Byte offset at which the scanner gave up, counted from the start of
    /// the input. Leading whitespace is skipped before the scan proper, so
    /// for input `"  x"` the offset is 2.
    pub fn byte_offset(&self) -> usize {
        self.err.offset
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> ErrorCode {
        self.err.code
    }

    pub(crate) fn new(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset }),
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    offset: usize,
}

/// The reason the scanner found nothing to convert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// The input was empty, or contained only whitespace.
    EmptyInput,
    /// The input has content, but no floating-point literal starts at the
    /// scan position.
    NoConversion,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::EmptyInput => f.write_str("empty input"),
            ErrorCode::NoConversion => f.write_str("no convertible prefix"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at byte {}", self.err.code, self.err.offset)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often end
// up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, byte: {})",
            self.err.code, self.err.offset,
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
