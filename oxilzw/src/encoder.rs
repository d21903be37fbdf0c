//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::{Code, LzwDictionary};
use crate::error::Result;

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for string lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::for_encoding(config)?;
        Ok(Self { dict })
    }

    /// Encode data into a sequence of 16-bit codes.
    ///
    /// # Algorithm
    ///
    /// Greedy longest-prefix LZW:
    /// 1. Start from the 256 literal codes
    /// 2. Extend the current match `w` one byte at a time
    /// 3. When `w + b` is unknown, emit `w`, learn `w + b`, restart at `b`
    /// 4. Emit the final match once input is exhausted
    ///
    /// The dictionary is reset at the start of every call. Once it is full,
    /// matches keep being emitted from the frozen table.
    ///
    /// # Parameters
    ///
    /// - `input`: Data to compress
    ///
    /// # Returns
    ///
    /// The code sequence; empty for empty input.
    pub fn encode(&mut self, input: &[u8]) -> Vec<Code> {
        self.dict.reset();

        let mut bytes = input.iter();
        let Some(&first) = bytes.next() else {
            return Vec::new();
        };

        let mut output = Vec::with_capacity(input.len() / 2 + 1);
        let mut current = Code::from(first);

        for &byte in bytes {
            match self.dict.find_child(current, byte) {
                Some(code) => current = code,
                None => {
                    output.push(current);
                    self.dict.insert(current, byte);
                    current = Code::from(byte);
                }
            }
        }

        output.push(current);
        output
    }

    /// Number of sequences learned by the most recent `encode` call.
    pub fn learned(&self) -> usize {
        self.dict.learned()
    }

    /// Reset the encoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}

impl Default for LzwEncoder {
    /// Encoder with the full 16-bit dictionary.
    fn default() -> Self {
        Self {
            dict: LzwDictionary::prevalidated(LzwConfig::DEFAULT, true),
        }
    }
}
