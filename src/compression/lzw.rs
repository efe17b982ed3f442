//! Lempel-Ziv-Welch dictionary coding.
//!
//! The dictionary starts with the 256 single-byte strings and grows by one
//! entry per emitted code; the next code is always the current dictionary
//! size. The encoder never stores byte strings: entries are a trie keyed by
//! (parent code, next byte), so each input byte costs one map lookup. The
//! decoder rebuilds the same dictionary from the code stream alone,
//! including the classic KwK case where a code is referenced one step before
//! it exists.
//!
//! Codes are written as a length byte followed by that many big-endian code
//! bytes. Early codes cost two bytes, and the width grows only when the
//! dictionary does.
//!
//! Growth is bounded by [`LzwOptions::max_entries`] under a selectable
//! [`Overflow`] policy, which must match between encoder and decoder or
//! reconstruction diverges.

use std::collections::HashMap;

use crate::error::CodecError;

/// What to do when the dictionary reaches its entry limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Fail the whole operation.
    Abort,
    /// Keep coding with the dictionary frozen as-is.
    StopStore,
    /// Ignore the limit entirely.
    Unlimited,
}

/// Dictionary size presets offered on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionarySize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl DictionarySize {
    pub fn entries(self) -> usize {
        match self {
            DictionarySize::Small => 1_000,
            DictionarySize::Medium => 10_000,
            DictionarySize::Large => 100_000,
            DictionarySize::ExtraLarge => 1_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwOptions {
    /// Total entry limit, counting the 256 built-in single-byte entries.
    pub max_entries: usize,
    pub overflow: Overflow,
}

impl Default for LzwOptions {
    fn default() -> Self {
        Self {
            max_entries: DictionarySize::Medium.entries(),
            overflow: Overflow::Abort,
        }
    }
}

fn validate(options: &LzwOptions) -> Result<(), CodecError> {
    if options.max_entries == 0 {
        return Err(CodecError::InvalidOption("max_entries must be positive"));
    }
    Ok(())
}

/// Whether one more entry may be stored at the current dictionary size.
fn may_grow(options: &LzwOptions, dict_size: u32) -> Result<bool, CodecError> {
    match options.overflow {
        Overflow::Unlimited => Ok(true),
        Overflow::StopStore => Ok((dict_size as usize) < options.max_entries),
        Overflow::Abort => {
            if (dict_size as usize) < options.max_entries {
                Ok(true)
            } else {
                Err(CodecError::OutOfMemory(options.max_entries))
            }
        }
    }
}

pub fn encode(data: &[u8], options: &LzwOptions) -> Result<Vec<u8>, CodecError> {
    validate(options)?;
    let mut trie: HashMap<(u32, u8), u32> = HashMap::new();
    let mut dict_size: u32 = 256;
    let mut out = Vec::with_capacity(data.len());
    let mut current: Option<u32> = None;

    for &byte in data {
        match current {
            // Every single byte is in the initial dictionary.
            None => current = Some(byte as u32),
            Some(code) => {
                if let Some(&child) = trie.get(&(code, byte)) {
                    current = Some(child);
                } else {
                    emit(&mut out, code);
                    if may_grow(options, dict_size)? {
                        trie.insert((code, byte), dict_size);
                        dict_size += 1;
                    }
                    current = Some(byte as u32);
                }
            }
        }
    }
    if let Some(code) = current {
        emit(&mut out, code);
    }
    Ok(out)
}

/// Length byte, then the code in that many bytes, big-endian. Code 0 still
/// takes one byte.
fn emit(out: &mut Vec<u8>, code: u32) {
    let bits = 32 - code.leading_zeros();
    let len = ((bits + 7) / 8).max(1) as usize;
    out.push(len as u8);
    for i in (0..len).rev() {
        out.push((code >> (8 * i)) as u8);
    }
}

pub fn decode(data: &[u8], options: &LzwOptions) -> Result<Vec<u8>, CodecError> {
    validate(options)?;
    // Entries for codes 256 and up; smaller codes are their own byte.
    let mut entries: Vec<Vec<u8>> = Vec::new();
    let mut out: Vec<u8> = Vec::new();
    let mut prev: Option<Vec<u8>> = None;
    let mut pos = 0usize;

    while pos < data.len() {
        let len = data[pos] as usize;
        pos += 1;
        if len == 0 {
            return Err(CodecError::Corrupt("zero-length code"));
        }
        if pos + len > data.len() {
            return Err(CodecError::Truncated("code ended early"));
        }
        let mut wide: u64 = 0;
        for &b in &data[pos..pos + len] {
            wide = (wide << 8) | b as u64;
            if wide > u32::MAX as u64 {
                return Err(CodecError::Corrupt("code out of range"));
            }
        }
        pos += len;

        let dict_size = 256 + entries.len() as u32;
        if wide > dict_size as u64 {
            return Err(CodecError::Corrupt("code beyond dictionary"));
        }
        let code = wide as u32;

        let current: Vec<u8>;
        if code < dict_size {
            current = if code < 256 {
                vec![code as u8]
            } else {
                entries[code as usize - 256].clone()
            };
            if let Some(prev_seq) = &prev {
                let mut entry = prev_seq.clone();
                entry.push(current[0]);
                if may_grow(options, dict_size)? {
                    entries.push(entry);
                }
            }
        } else {
            // code == dict_size: the entry being referenced is the one this
            // very step creates (KwK).
            let Some(prev_seq) = &prev else {
                return Err(CodecError::Corrupt("first code not in dictionary"));
            };
            let mut entry = prev_seq.clone();
            entry.push(prev_seq[0]);
            if !may_grow(options, dict_size)? {
                return Err(CodecError::Corrupt("code references a frozen dictionary slot"));
            }
            entries.push(entry.clone());
            current = entry;
        }
        out.extend_from_slice(&current);
        prev = Some(current);
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classic_sentence_round_trips() {
        let data = b"TOBEORNOTTOBEORTOBEORNOT";
        let options = LzwOptions::default();
        let packed = encode(data, &options).unwrap();
        assert_eq!(decode(&packed, &options), Ok(data.to_vec()));
        // The repeats must actually hit the dictionary.
        assert!(packed.len() < 2 * data.len());
    }

    #[test]
    fn single_bytes_cost_two_bytes_each() {
        let options = LzwOptions::default();
        assert_eq!(encode(b"A", &options), Ok(vec![1, 0x41]));
        assert_eq!(encode(b"AB", &options), Ok(vec![1, 0x41, 1, 0x42]));
    }

    #[test]
    fn empty_input_is_empty_output() {
        let options = LzwOptions::default();
        assert_eq!(encode(b"", &options), Ok(vec![]));
        assert_eq!(decode(&[], &options), Ok(vec![]));
    }

    #[test]
    fn kwk_case_round_trips() {
        // "aaaa" forces the decoder to use code 256 before it is stored.
        let options = LzwOptions::default();
        let packed = encode(b"aaaa", &options).unwrap();
        assert_eq!(packed, vec![1, 0x61, 2, 0x01, 0x00, 1, 0x61]);
        assert_eq!(decode(&packed, &options), Ok(b"aaaa".to_vec()));
    }

    #[test]
    fn abort_policy_fails_when_the_dictionary_fills() {
        // 600 distinct byte pairs force ~600 insertions against a cap of 300.
        let data: Vec<u8> = (0..600u16).flat_map(|i| i.to_be_bytes()).collect();
        let options = LzwOptions {
            max_entries: 300,
            overflow: Overflow::Abort,
        };
        assert_eq!(encode(&data, &options), Err(CodecError::OutOfMemory(300)));
    }

    #[test]
    fn stop_store_keeps_coding_past_the_limit() {
        let data: Vec<u8> = (0..600u16).flat_map(|i| i.to_be_bytes()).collect();
        let options = LzwOptions {
            max_entries: 300,
            overflow: Overflow::StopStore,
        };
        let packed = encode(&data, &options).unwrap();
        assert_eq!(decode(&packed, &options), Ok(data));
    }

    #[test]
    fn stop_store_below_the_builtin_alphabet_never_stores() {
        let data = b"abcabcabcabc";
        let options = LzwOptions {
            max_entries: 100,
            overflow: Overflow::StopStore,
        };
        let packed = encode(data, &options).unwrap();
        // Nothing beyond the single-byte alphabet can be stored, so every
        // code is one data byte.
        assert_eq!(packed.len(), 2 * data.len());
        assert_eq!(decode(&packed, &options), Ok(data.to_vec()));
    }

    #[test]
    fn mismatched_policies_are_not_a_round_trip() {
        // Encoded with room to grow, decoded with a frozen dictionary: the
        // stream references entries the decoder refused to store.
        let data: Vec<u8> = b"xyxyxyxyxyxyxyxyxyxyxy".repeat(40);
        let roomy = LzwOptions {
            max_entries: 10_000,
            overflow: Overflow::StopStore,
        };
        let tight = LzwOptions {
            max_entries: 260,
            overflow: Overflow::StopStore,
        };
        let packed = encode(&data, &roomy).unwrap();
        assert!(matches!(
            decode(&packed, &tight),
            Err(CodecError::Corrupt(_))
        ));
    }

    #[test]
    fn zero_max_entries_is_rejected() {
        let options = LzwOptions {
            max_entries: 0,
            overflow: Overflow::StopStore,
        };
        assert_eq!(
            encode(b"x", &options),
            Err(CodecError::InvalidOption("max_entries must be positive"))
        );
        assert_eq!(
            decode(&[1, 0x78], &options),
            Err(CodecError::InvalidOption("max_entries must be positive"))
        );
    }

    #[test]
    fn malformed_streams_are_rejected() {
        let options = LzwOptions::default();
        // Zero-length code.
        assert_eq!(
            decode(&[0], &options),
            Err(CodecError::Corrupt("zero-length code"))
        );
        // Length byte promises more bytes than remain.
        assert_eq!(
            decode(&[2, 0x01], &options),
            Err(CodecError::Truncated("code ended early"))
        );
        // First code cannot reference a multi-byte entry.
        assert_eq!(
            decode(&[2, 0x01, 0x00], &options),
            Err(CodecError::Corrupt("first code not in dictionary"))
        );
        // Code skips past the next free slot.
        assert_eq!(
            decode(&[1, 0x41, 2, 0x01, 0x05], &options),
            Err(CodecError::Corrupt("code beyond dictionary"))
        );
        // A code that cannot fit in 32 bits.
        assert_eq!(
            decode(&[5, 0x01, 0x00, 0x00, 0x00, 0x00], &options),
            Err(CodecError::Corrupt("code out of range"))
        );
    }
}
