//! # OxiLZW: Pure Rust Parallel LZW
//!
//! This crate provides a lossless LZW (Lempel-Ziv-Welch) codec that turns
//! arbitrary bytes into fixed-width 16-bit dictionary codes and back, plus a
//! parallel driver that compresses large inputs as independent chunks.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Fixed 16-bit codes**: Up to 65536 dictionary entries, frozen when full
//! - **Parallel chunks**: Independent per-chunk dictionaries on a rayon pool
//! - **Line-safe framing**: One escaped, newline-terminated line per chunk
//!
//! ## Code Stream
//!
//! - Codes 0-255 are literal bytes; 256 and up are learned sequences
//! - No clear code, no end-of-information code
//! - Raw serialization is little-endian `u16` per code
//! - Framed serialization escapes `\n` and `\` inside each line with `\`
//!
//! ## Example
//!
//! ```rust
//! use oxilzw::{decode, encode};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let codes = encode(original);
//! assert!(codes.len() < original.len());
//!
//! let decoded = decode(&codes).unwrap();
//! assert_eq!(decoded, original);
//! ```
//!
//! ## Parallel Example
//!
//! ```rust
//! use oxilzw::{ParallelConfig, compress_framed, parallel_decode};
//!
//! let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
//! let config = ParallelConfig::new(4).with_min_chunk_len(512);
//!
//! let framed = compress_framed(&original, &config).unwrap();
//! assert_eq!(framed.last(), Some(&b'\n'));
//!
//! let decoded = parallel_decode(&framed).unwrap();
//! assert_eq!(decoded, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;
pub mod escape;
pub mod frame;
mod parallel;

pub use config::{DEFAULT_MIN_CHUNK_LEN, LzwConfig, MAX_CODES, ParallelConfig};
pub use decoder::LzwDecoder;
pub use dictionary::{Code, LzwDictionary};
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use escape::{Unescape, escape, unescape};
pub use frame::{FramedLines, codes_from_bytes, codes_to_bytes, write_framed};
pub use parallel::{
    compress_framed, decompress_framed, parallel_decode, parallel_decode_chunks,
    parallel_decode_with, parallel_encode, parallel_encode_with, plan_chunks,
};

/// Encode bytes into LZW codes with the full 16-bit dictionary.
///
/// # Example
///
/// ```rust
/// use oxilzw::encode;
///
/// assert!(encode(b"").is_empty());
/// assert_eq!(encode(b"A"), vec![65]);
/// ```
pub fn encode(data: &[u8]) -> Vec<Code> {
    LzwEncoder::default().encode(data)
}

/// Encode bytes into LZW codes with the given configuration.
pub fn encode_with(data: &[u8], config: LzwConfig) -> Result<Vec<Code>> {
    let mut encoder = LzwEncoder::new(config)?;
    Ok(encoder.encode(data))
}

/// Decode LZW codes produced with the full 16-bit dictionary.
///
/// # Example
///
/// ```rust
/// use oxilzw::{LzwError, decode};
///
/// assert_eq!(decode(&[72, 105]).unwrap(), b"Hi");
/// assert!(matches!(decode(&[999]), Err(LzwError::CorruptStream { .. })));
/// ```
pub fn decode(codes: &[Code]) -> Result<Vec<u8>> {
    LzwDecoder::default().decode(codes)
}

/// Decode LZW codes with the given configuration.
pub fn decode_with(codes: &[Code], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode(codes)
}
