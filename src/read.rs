//! Byte-slice cursor the scanner drives.

/// Input source that reads from a slice of bytes.
//
// Peeking is read-only and never fails, so the grammar in `scan` can probe a
// character and decide whether to consume it without any lookahead buffer.
pub(crate) struct Cursor<'a> {
    slice: &'a [u8],
    /// Index of the *next* byte that will be returned by peek().
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(slice: &'a [u8]) -> Self {
        Cursor { slice, index: 0 }
    }

    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        if self.index < self.slice.len() {
            Some(self.slice[self.index])
        } else {
            None
        }
    }

    /// Only valid after a call to peek(). Consumes the peeked byte.
    #[inline]
    pub(crate) fn bump(&mut self) {
        self.index += 1;
    }

    /// Offset from the beginning of the input to the next byte that would be
    /// returned by peek().
    #[inline]
    pub(crate) fn byte_offset(&self) -> usize {
        self.index
    }

    /// Rewind to an offset previously obtained from byte_offset(). Used to
    /// back out of a partially matched exponent.
    #[inline]
    pub(crate) fn set_offset(&mut self, offset: usize) {
        self.index = offset;
    }

    /// Consume the byte if it is the next one in the input.
    #[inline]
    pub(crate) fn eat_byte(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Consume `word` if the input continues with it, ignoring ASCII case.
    /// Nothing is consumed on a partial match.
    pub(crate) fn eat_ignore_ascii_case(&mut self, word: &[u8]) -> bool {
        let end = match self.index.checked_add(word.len()) {
            Some(end) if end <= self.slice.len() => end,
            _ => return false,
        };
        if self.slice[self.index..end].eq_ignore_ascii_case(word) {
            self.index = end;
            true
        } else {
            false
        }
    }

    /// Consume a run of ASCII digits, possibly empty, and return it.
    pub(crate) fn eat_digits(&mut self) -> &'a [u8] {
        let start = self.index;
        while self
            .peek()
            .map_or(false, |byte| byte.is_ascii_digit())
        {
            self.index += 1;
        }
        &self.slice[start..self.index]
    }

    /// Consume the whitespace characters `strtod` skips before a number.
    pub(crate) fn eat_whitespace(&mut self) {
        while self.peek().map_or(false, is_whitespace) {
            self.index += 1;
        }
    }
}

/// The C `isspace` set in the "C" locale.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
