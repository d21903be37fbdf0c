//! LZW-specific error types.

use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// A code that is neither a known dictionary entry nor the next
    /// assignable code.
    #[error("Corrupt LZW stream: code {code} at position {position} (next assignable code {next_code})")]
    CorruptStream {
        /// The offending code.
        code: u16,
        /// Index of the code within its code sequence.
        position: usize,
        /// The code the dictionary would have assigned next.
        next_code: u32,
    },

    /// A line payload that cannot be split into 16-bit codes.
    #[error("Line payload has odd length {len} (codes are 2 bytes wide)")]
    OddPayload {
        /// Unescaped payload length in bytes.
        len: usize,
    },

    /// A framed stream that ends without a line terminator.
    #[error("Unterminated line starting at byte offset {offset}")]
    UnterminatedLine {
        /// Offset of the first byte of the unterminated line.
        offset: usize,
    },

    /// A chunk failed during parallel processing.
    #[error("Chunk {index} failed: {source}")]
    Chunk {
        /// Index of the failing chunk in input order.
        index: usize,
        /// The chunk's error.
        #[source]
        source: Box<LzwError>,
    },

    /// Worker count must be at least one.
    #[error("Invalid worker count: {0} (must be at least 1)")]
    InvalidWorkerCount(usize),

    /// Dictionary capacity outside the representable range.
    #[error("Invalid dictionary size: {0} (must be 257-65536)")]
    InvalidMaxCodes(u32),

    /// The worker pool could not be created.
    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LzwError {
    /// Wrap an error with the index of the chunk it came from.
    pub(crate) fn in_chunk(self, index: usize) -> Self {
        LzwError::Chunk {
            index,
            source: Box::new(self),
        }
    }
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_wraps_source() {
        let err = LzwError::CorruptStream {
            code: 300,
            position: 1,
            next_code: 256,
        }
        .in_chunk(3);

        let msg = err.to_string();
        assert!(msg.starts_with("Chunk 3 failed"));
        assert!(msg.contains("code 300"));

        let source = std::error::Error::source(&err).expect("chunk error has a source");
        assert!(source.to_string().contains("next assignable code 256"));
    }
}
