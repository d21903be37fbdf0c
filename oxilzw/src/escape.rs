//! Line-safe escaping for serialized code runs.
//!
//! A serialized chunk is stored as one text line. Inside the payload every
//! [`NEWLINE`] and every [`ESCAPE_MARKER`] byte is preceded by one
//! [`ESCAPE_MARKER`]; no padding byte follows the marker. The line ends with
//! a single unescaped [`NEWLINE`].

use std::iter::FusedIterator;

/// Byte that protects the byte following it.
pub const ESCAPE_MARKER: u8 = b'\\';

/// Line terminator.
pub const NEWLINE: u8 = b'\n';

/// Check whether a payload byte must be escaped.
#[inline]
pub fn needs_escape(byte: u8) -> bool {
    byte == ESCAPE_MARKER || byte == NEWLINE
}

/// Append `payload` to `out` as one escaped, newline-terminated line.
pub fn escape_into(payload: &[u8], out: &mut Vec<u8>) {
    out.reserve(payload.len() + payload.len() / 64 + 1);
    for &byte in payload {
        if needs_escape(byte) {
            out.push(ESCAPE_MARKER);
        }
        out.push(byte);
    }
    out.push(NEWLINE);
}

/// Escape `payload` into a new newline-terminated line.
pub fn escape(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    escape_into(payload, &mut out);
    out
}

/// Forward-only unescaping view over one line's raw bytes.
///
/// Each call to `next` consumes one raw byte, or a marker and the byte it
/// protects. Iteration ends at the first unescaped newline or at the end of
/// the input. A marker with nothing after it ends iteration without
/// yielding anything.
#[derive(Debug, Clone)]
pub struct Unescape<'a> {
    inner: std::slice::Iter<'a, u8>,
    done: bool,
}

impl<'a> Unescape<'a> {
    /// Create an unescaping view over `raw`.
    pub fn new(raw: &'a [u8]) -> Self {
        Self {
            inner: raw.iter(),
            done: false,
        }
    }

    /// Raw bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        self.inner.as_slice()
    }
}

impl Iterator for Unescape<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.done {
            return None;
        }

        let item = match self.inner.next().copied() {
            Some(ESCAPE_MARKER) => self.inner.next().copied(),
            Some(NEWLINE) | None => None,
            byte => byte,
        };

        if item.is_none() {
            self.done = true;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let raw = self.inner.len();
        (0, Some(raw))
    }
}

impl FusedIterator for Unescape<'_> {}

/// Unescape one line's raw bytes lazily.
pub fn unescape(raw: &[u8]) -> Unescape<'_> {
    Unescape::new(raw)
}
