//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary one step behind it. The only
//! code it may see before learning it is the very next code to be assigned
//! (the `KwKwK` case), whose sequence is `prev + first_byte(prev)`.

use crate::config::LzwConfig;
use crate::dictionary::{Code, LzwDictionary};
use crate::error::{LzwError, Result};

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        let dict = LzwDictionary::for_decoding(config)?;
        Ok(Self { dict })
    }

    /// Decode a code sequence back into bytes.
    ///
    /// The dictionary is reset at the start of every call.
    ///
    /// # Errors
    ///
    /// Returns [`LzwError::CorruptStream`] for a code that is neither assigned
    /// nor the next assignable code, and for a non-literal first code. No
    /// partial output is returned.
    pub fn decode(&mut self, codes: &[Code]) -> Result<Vec<u8>> {
        self.dict.reset();

        let mut output = Vec::with_capacity(codes.len() * 2);
        let mut prev: Option<Code> = None;

        for (position, &code) in codes.iter().enumerate() {
            // First byte of the sequence `code` stands for.
            let first = if self.dict.contains(code) {
                self.dict.first_byte(code)
            } else {
                match prev {
                    // KwKwK: `code` is about to be defined as prev + prev[0].
                    Some(prev) if u32::from(code) == self.dict.next_code() => {
                        self.dict.first_byte(prev)
                    }
                    _ => None,
                }
            };

            let Some(first) = first else {
                return Err(self.corrupt(code, position));
            };

            // Shared growth rule: learn prev + first byte of current entry.
            if let Some(prev) = prev {
                self.dict.insert(prev, first);
            }

            if !self.dict.expand_into(code, &mut output) {
                return Err(self.corrupt(code, position));
            }

            prev = Some(code);
        }

        Ok(output)
    }

    fn corrupt(&self, code: Code, position: usize) -> LzwError {
        LzwError::CorruptStream {
            code,
            position,
            next_code: self.dict.next_code(),
        }
    }

    /// Reset the decoder to initial state.
    pub fn reset(&mut self) {
        self.dict.reset();
    }
}

impl Default for LzwDecoder {
    /// Decoder with the full 16-bit dictionary.
    fn default() -> Self {
        Self {
            dict: LzwDictionary::prevalidated(LzwConfig::DEFAULT, false),
        }
    }
}
