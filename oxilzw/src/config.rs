//! Dictionary and chunking configuration.

use crate::error::{LzwError, Result};

/// Number of literal single-byte codes (0-255).
pub const LITERAL_CODES: u32 = 256;

/// Largest dictionary a 16-bit code can address.
pub const MAX_CODES: u32 = 1 << 16;

/// Default lower bound on the size of a parallel chunk.
pub const DEFAULT_MIN_CHUNK_LEN: usize = 64 * 1024;

/// LZW dictionary parameters.
///
/// Codes are always written as 16-bit values; `max_codes` only limits how far
/// the dictionary grows before it freezes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Total dictionary capacity, literals included.
    pub max_codes: u32,
}

impl LzwConfig {
    /// Full 16-bit dictionary (65536 entries).
    pub const DEFAULT: Self = Self {
        max_codes: MAX_CODES,
    };

    /// Create a configuration with a custom dictionary capacity.
    pub fn new(max_codes: u32) -> Self {
        Self { max_codes }
    }

    /// Check that the capacity holds the literals plus at least one learned
    /// entry and fits in a 16-bit code.
    pub fn validate(&self) -> Result<()> {
        if self.max_codes <= LITERAL_CODES || self.max_codes > MAX_CODES {
            return Err(LzwError::InvalidMaxCodes(self.max_codes));
        }
        Ok(())
    }

    /// Get the first code available for learned sequences.
    pub fn first_code(&self) -> u32 {
        LITERAL_CODES
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings for the chunked parallel driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Worker pool size; also the upper bound on the chunk count.
    pub workers: usize,
    /// Chunks are not split below this many bytes.
    pub min_chunk_len: usize,
    /// Per-chunk dictionary settings.
    pub lzw: LzwConfig,
}

impl ParallelConfig {
    /// Create a configuration with the given worker count.
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }

    /// Set the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the minimum chunk length.
    pub fn with_min_chunk_len(mut self, min_chunk_len: usize) -> Self {
        self.min_chunk_len = min_chunk_len;
        self
    }

    /// Set the per-chunk dictionary configuration.
    pub fn with_lzw(mut self, lzw: LzwConfig) -> Self {
        self.lzw = lzw;
        self
    }

    /// Validate worker count and dictionary settings.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(LzwError::InvalidWorkerCount(self.workers));
        }
        self.lzw.validate()
    }
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            workers: rayon::current_num_threads().max(1),
            min_chunk_len: DEFAULT_MIN_CHUNK_LEN,
            lzw: LzwConfig::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LzwConfig::DEFAULT;
        assert_eq!(config.max_codes, 65536);
        assert_eq!(config.first_code(), 256);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(matches!(
            LzwConfig::new(256).validate(),
            Err(LzwError::InvalidMaxCodes(256))
        ));
        assert!(matches!(
            LzwConfig::new(65537).validate(),
            Err(LzwError::InvalidMaxCodes(65537))
        ));
        assert!(LzwConfig::new(257).validate().is_ok());
    }

    #[test]
    fn test_parallel_config() {
        let config = ParallelConfig::new(4).with_min_chunk_len(16);
        assert_eq!(config.workers, 4);
        assert_eq!(config.min_chunk_len, 16);
        assert_eq!(config.lzw, LzwConfig::DEFAULT);
        assert!(config.validate().is_ok());

        assert!(matches!(
            ParallelConfig::new(0).validate(),
            Err(LzwError::InvalidWorkerCount(0))
        ));
        assert!(ParallelConfig::default().workers >= 1);
    }
}
