//! Code stream serialization.
//!
//! Two layouts are supported:
//!
//! - **Raw**: one code sequence as consecutive little-endian `u16` values.
//! - **Framed**: one escaped line per chunk (see [`crate::escape`]), each
//!   line's payload being that chunk's raw code bytes.

use crate::dictionary::Code;
use crate::error::{LzwError, Result};
use crate::escape::{self, ESCAPE_MARKER, NEWLINE};
use std::io::Write;

/// Bytes per serialized code.
pub const CODE_BYTES: usize = std::mem::size_of::<Code>();

/// Append codes to `out` as little-endian `u16` values.
pub fn write_codes(codes: &[Code], out: &mut Vec<u8>) {
    out.reserve(codes.len() * CODE_BYTES);
    for code in codes {
        out.extend_from_slice(&code.to_le_bytes());
    }
}

/// Serialize codes as little-endian `u16` values.
pub fn codes_to_bytes(codes: &[Code]) -> Vec<u8> {
    let mut out = Vec::new();
    write_codes(codes, &mut out);
    out
}

/// Reinterpret raw bytes as little-endian `u16` codes.
///
/// # Errors
///
/// [`LzwError::OddPayload`] if the length is not a multiple of two.
pub fn codes_from_bytes(bytes: &[u8]) -> Result<Vec<Code>> {
    if bytes.len() % CODE_BYTES != 0 {
        return Err(LzwError::OddPayload { len: bytes.len() });
    }

    Ok(bytes
        .chunks_exact(CODE_BYTES)
        .map(|pair| Code::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Serialize per-chunk code sequences as framed lines, in order.
pub fn frame<C: AsRef<[Code]>>(chunks: &[C]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut payload = Vec::new();
    for chunk in chunks {
        payload.clear();
        write_codes(chunk.as_ref(), &mut payload);
        escape::escape_into(&payload, &mut out);
    }
    out
}

/// Write per-chunk code sequences as framed lines to `writer`.
pub fn write_framed<C: AsRef<[Code]>, W: Write>(chunks: &[C], mut writer: W) -> Result<()> {
    let mut payload = Vec::new();
    let mut line = Vec::new();
    for chunk in chunks {
        payload.clear();
        line.clear();
        write_codes(chunk.as_ref(), &mut payload);
        escape::escape_into(&payload, &mut line);
        writer.write_all(&line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Iterator over the raw (still escaped) lines of a framed stream.
///
/// Yields each line without its terminator. Splits only on unescaped
/// newlines; an escaped newline stays inside its line.
#[derive(Debug, Clone)]
pub struct FramedLines<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> FramedLines<'a> {
    /// Create a line iterator over a framed stream.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }
}

impl<'a> Iterator for FramedLines<'a> {
    type Item = Result<&'a [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset;
        if start >= self.data.len() {
            return None;
        }

        let mut pos = start;
        while pos < self.data.len() {
            match self.data[pos] {
                ESCAPE_MARKER => pos += 2,
                NEWLINE => {
                    self.offset = pos + 1;
                    return Some(Ok(&self.data[start..pos]));
                }
                _ => pos += 1,
            }
        }

        // Ran off the end: missing terminator or dangling marker.
        self.offset = self.data.len();
        Some(Err(LzwError::UnterminatedLine { offset: start }))
    }
}

/// Split a framed stream into raw lines.
pub fn lines(data: &[u8]) -> FramedLines<'_> {
    FramedLines::new(data)
}

/// Unescape one raw line and reinterpret it as codes.
pub fn decode_line(raw: &[u8]) -> Result<Vec<Code>> {
    let payload: Vec<u8> = escape::unescape(raw).collect();
    codes_from_bytes(&payload)
}

/// Split and decode a whole framed stream into per-chunk code sequences.
pub fn unframe(data: &[u8]) -> Result<Vec<Vec<Code>>> {
    lines(data)
        .enumerate()
        .map(|(index, line)| {
            line.and_then(decode_line)
                .map_err(|e| e.in_chunk(index))
        })
        .collect()
}
