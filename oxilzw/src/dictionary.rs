//! LZW dictionary (code table) management.
//!
//! Every learned entry is stored as `(prefix code, appended byte)`, so the
//! table is a trie rooted at the 256 literal codes. Encoder and decoder grow
//! their tables through the same [`LzwDictionary::insert`] call, which keeps
//! the two sides assigning identical codes in identical order.

use crate::config::LzwConfig;
use crate::error::Result;
use log::debug;
use std::collections::HashMap;

/// A dictionary code. Values below 256 are literal bytes.
pub type Code = u16;

/// One table slot.
#[derive(Debug, Clone, Copy)]
struct Entry {
    /// Code of the sequence minus its last byte (`None` for literals).
    prefix: Option<Code>,
    /// Last byte of the sequence.
    byte: u8,
    /// First byte of the sequence.
    first: u8,
    /// Sequence length in bytes.
    len: u32,
}

/// LZW dictionary for encoding and decoding.
///
/// The dictionary maintains a mapping between codes and byte sequences.
/// For encoding, we also maintain a reverse index (prefix, byte) -> code.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> entry.
    table: Vec<Entry>,
    /// Reverse lookup for encoding; left empty on the decode side.
    children: HashMap<(Code, u8), Code>,
    /// Whether `children` is maintained.
    indexed: bool,
    /// Configuration.
    config: LzwConfig,
}

impl LzwDictionary {
    /// Create a dictionary with a reverse index, for the encoder.
    pub fn for_encoding(config: LzwConfig) -> Result<Self> {
        Self::with_index(config, true)
    }

    /// Create a dictionary without a reverse index, for the decoder.
    pub fn for_decoding(config: LzwConfig) -> Result<Self> {
        Self::with_index(config, false)
    }

    fn with_index(config: LzwConfig, indexed: bool) -> Result<Self> {
        config.validate()?;
        Ok(Self::prevalidated(config, indexed))
    }

    /// Build without validating; `config` must already be known good.
    pub(crate) fn prevalidated(config: LzwConfig, indexed: bool) -> Self {
        let mut dict = Self {
            table: Vec::with_capacity(config.max_codes as usize),
            children: HashMap::new(),
            indexed,
            config,
        };

        dict.reset();
        dict
    }

    /// Reset the dictionary to the 256 literal entries.
    pub fn reset(&mut self) {
        self.table.clear();
        self.children.clear();

        for byte in 0..=u8::MAX {
            self.table.push(Entry {
                prefix: None,
                byte,
                first: byte,
                len: 1,
            });
        }
    }

    /// Find the code for a byte sequence.
    ///
    /// Sequences longer than one byte are only found on an encoding
    /// dictionary.
    pub fn lookup(&self, sequence: &[u8]) -> Option<Code> {
        let (&first, rest) = sequence.split_first()?;
        rest.iter()
            .try_fold(Code::from(first), |code, &byte| self.find_child(code, byte))
    }

    /// Find the code for `sequence(prefix) + byte`.
    #[inline]
    pub fn find_child(&self, prefix: Code, byte: u8) -> Option<Code> {
        self.children.get(&(prefix, byte)).copied()
    }

    /// Learn `sequence(prefix) + byte` under the next unused code.
    ///
    /// Returns the assigned code, or `None` once the table is full; a full
    /// table is frozen, not an error.
    pub fn insert(&mut self, prefix: Code, byte: u8) -> Option<Code> {
        if self.is_full() {
            return None;
        }

        let parent = *self.table.get(usize::from(prefix))?;
        let code = self.table.len() as Code;
        self.table.push(Entry {
            prefix: Some(prefix),
            byte,
            first: parent.first,
            len: parent.len + 1,
        });

        if self.indexed {
            self.children.insert((prefix, byte), code);
        }

        if self.is_full() {
            debug!(
                "LZW dictionary full at {} entries; growth frozen",
                self.config.max_codes
            );
        }

        Some(code)
    }

    /// Check whether a code has been assigned.
    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        usize::from(code) < self.table.len()
    }

    /// Get the first byte of a code's sequence.
    #[inline]
    pub fn first_byte(&self, code: Code) -> Option<u8> {
        self.table.get(usize::from(code)).map(|entry| entry.first)
    }

    /// Get the length of a code's sequence.
    pub fn sequence_len(&self, code: Code) -> Option<usize> {
        self.table
            .get(usize::from(code))
            .map(|entry| entry.len as usize)
    }

    /// Append the byte sequence for `code` to `out`.
    ///
    /// Returns `false` (leaving `out` untouched) if the code is unassigned.
    pub fn expand_into(&self, code: Code, out: &mut Vec<u8>) -> bool {
        let Some(len) = self.sequence_len(code) else {
            return false;
        };

        let start = out.len();
        out.resize(start + len, 0);

        // Walk the prefix chain, filling from the back.
        let mut cursor = Some(code);
        for slot in out[start..].iter_mut().rev() {
            let Some(entry) = cursor.and_then(|c| self.table.get(usize::from(c))) else {
                break;
            };
            *slot = entry.byte;
            cursor = entry.prefix;
        }

        true
    }

    /// Check if the dictionary is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.table.len() as u32 >= self.config.max_codes
    }

    /// Get the next code that will be assigned.
    ///
    /// Equals `max_codes` once the table is full, which may not fit a [`Code`].
    #[inline]
    pub fn next_code(&self) -> u32 {
        self.table.len() as u32
    }

    /// Number of learned (non-literal) entries.
    pub fn learned(&self) -> usize {
        self.table.len() - self.config.first_code() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_init() {
        let dict = LzwDictionary::for_encoding(LzwConfig::DEFAULT).unwrap();

        for i in 0..256u16 {
            assert_eq!(dict.lookup(&[i as u8]), Some(i));
            let mut out = Vec::new();
            assert!(dict.expand_into(i, &mut out));
            assert_eq!(out, [i as u8]);
        }

        assert_eq!(dict.next_code(), 256);
        assert_eq!(dict.learned(), 0);
        assert!(!dict.contains(256));
        assert!(!dict.is_full());
    }

    #[test]
    fn test_insert() {
        let mut dict = LzwDictionary::for_encoding(LzwConfig::DEFAULT).unwrap();

        let ab = dict.insert(u16::from(b'A'), b'B').unwrap();
        assert_eq!(ab, 256);
        let abc = dict.insert(ab, b'C').unwrap();
        assert_eq!(abc, 257);

        assert_eq!(dict.lookup(b"AB"), Some(ab));
        assert_eq!(dict.lookup(b"ABC"), Some(abc));
        assert_eq!(dict.find_child(ab, b'C'), Some(abc));
        assert_eq!(dict.first_byte(abc), Some(b'A'));
        assert_eq!(dict.sequence_len(abc), Some(3));

        let mut out = b"xy".to_vec();
        assert!(dict.expand_into(abc, &mut out));
        assert_eq!(out, b"xyABC");
    }

    #[test]
    fn test_lookup_missing() {
        let dict = LzwDictionary::for_encoding(LzwConfig::DEFAULT).unwrap();
        assert_eq!(dict.lookup(b""), None);
        assert_eq!(dict.lookup(b"XYZ"), None);
    }

    #[test]
    fn test_freeze_when_full() {
        let mut dict = LzwDictionary::for_encoding(LzwConfig::new(258)).unwrap();

        assert_eq!(dict.insert(1, 2), Some(256));
        assert_eq!(dict.insert(3, 4), Some(257));
        assert!(dict.is_full());

        // Frozen: no new code, existing entries intact.
        assert_eq!(dict.insert(5, 6), None);
        assert_eq!(dict.next_code(), 258);
        assert_eq!(dict.lookup(&[3, 4]), Some(257));
        assert_eq!(dict.lookup(&[5, 6]), None);
        assert_eq!(dict.learned(), 2);
    }

    #[test]
    fn test_decoding_side_grows_identically() {
        let mut enc = LzwDictionary::for_encoding(LzwConfig::DEFAULT).unwrap();
        let mut dec = LzwDictionary::for_decoding(LzwConfig::DEFAULT).unwrap();

        for (prefix, byte) in [(65u16, b'B'), (256, b'C'), (66, b'A')] {
            assert_eq!(enc.insert(prefix, byte), dec.insert(prefix, byte));
        }

        // Decode side keeps no reverse index.
        assert_eq!(dec.find_child(65, b'B'), None);
        let mut out = Vec::new();
        assert!(dec.expand_into(257, &mut out));
        assert_eq!(out, b"ABC");
    }

    #[test]
    fn test_reset() {
        let mut dict = LzwDictionary::for_encoding(LzwConfig::DEFAULT).unwrap();
        dict.insert(65, 66);
        dict.reset();
        assert_eq!(dict.next_code(), 256);
        assert_eq!(dict.lookup(b"AB"), None);
    }

    #[test]
    fn test_expand_unknown_code() {
        let dict = LzwDictionary::for_decoding(LzwConfig::DEFAULT).unwrap();
        let mut out = vec![1];
        assert!(!dict.expand_into(300, &mut out));
        assert_eq!(out, [1]);
    }
}
