//! Run-length coding at bit granularity.
//!
//! The input is read as a bit stream and each run of identical bits becomes a
//! 4-bit block: one payload bit and a 3-bit count holding run length minus
//! one. Runs longer than eight bits are split. Working on bits rather than
//! bytes is what makes this codec worthwhile after BWT and MTF, where most of
//! the stream is runs of zero bits.
//!
//! Layout: one pad-count byte, then the packed blocks MSB-first.

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::CodecError;

/// Longest run one block can carry.
const MAX_RUN: u64 = 8;

pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut bw = BitWriter::with_capacity(data.len() / 2 + 1);
    let mut run_bit = false;
    let mut run_len = 0u64;
    for &byte in data {
        for shift in (0..8).rev() {
            let bit = (byte >> shift) & 1 == 1;
            if run_len == 0 {
                run_bit = bit;
                run_len = 1;
            } else if bit == run_bit && run_len < MAX_RUN {
                run_len += 1;
            } else {
                emit_block(&mut bw, run_bit, run_len);
                run_bit = bit;
                run_len = 1;
            }
        }
    }
    if run_len > 0 {
        emit_block(&mut bw, run_bit, run_len);
    }
    let (blocks, pad) = bw.finalize();
    let mut out = Vec::with_capacity(blocks.len() + 1);
    out.push(pad);
    out.extend_from_slice(&blocks);
    out
}

fn emit_block(bw: &mut BitWriter, bit: bool, len: u64) {
    debug_assert!((1..=MAX_RUN).contains(&len));
    bw.push(bit as u64, 1);
    bw.push(len - 1, 3);
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let (&pad, blocks) = data
        .split_first()
        .ok_or(CodecError::Truncated("missing pad byte"))?;
    let mut br = BitReader::with_pad(blocks, pad)?;
    if br.remaining() % 4 != 0 {
        return Err(CodecError::Corrupt("partial run block"));
    }
    let mut bw = BitWriter::with_capacity(blocks.len() * 2);
    while br.remaining() > 0 {
        let bit = br.read(1)?;
        let len = br.read(3)? + 1;
        let run = if bit == 1 { (1u64 << len) - 1 } else { 0 };
        bw.push(run, len as u32);
    }
    // The original input was whole bytes; anything else is damage.
    if bw.bit_len() % 8 != 0 {
        return Err(CodecError::Corrupt("run lengths do not add up to whole bytes"));
    }
    let (out, _) = bw.finalize();
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sixteen_ones_pack_into_two_blocks() {
        // Two runs of eight set bits: blocks 1111 and 1111, no padding.
        assert_eq!(encode(&[0xFF, 0xFF]), vec![0x00, 0xFF]);
        assert_eq!(decode(&[0x00, 0xFF]), Ok(vec![0xFF, 0xFF]));
    }

    #[test]
    fn empty_input_is_a_lone_pad_byte() {
        assert_eq!(encode(&[]), vec![0x00]);
        assert_eq!(decode(&[0x00]), Ok(vec![]));
    }

    #[test]
    fn alternating_bits_expand_but_survive() {
        let data = vec![0b1010_1010u8; 3];
        assert_eq!(decode(&encode(&data)), Ok(data));
    }

    #[test]
    fn long_runs_split() {
        // 24 zero bits: three full blocks of eight.
        let out = encode(&[0x00, 0x00, 0x00]);
        assert_eq!(out, vec![0x04, 0b0111_0111, 0b0111_0000]);
        assert_eq!(decode(&out), Ok(vec![0x00, 0x00, 0x00]));
    }

    #[test]
    fn round_trip_mixed_patterns() {
        for data in [
            &b"banana"[..],
            &[0x0F, 0xF0][..],
            &[0u8; 64][..],
            &[0xFFu8; 64][..],
            &b"The quick brown fox"[..],
        ] {
            assert_eq!(decode(&encode(data)), Ok(data.to_vec()), "input {:?}", data);
        }
    }

    #[test]
    fn missing_pad_byte_is_truncated() {
        assert_eq!(decode(&[]), Err(CodecError::Truncated("missing pad byte")));
    }

    #[test]
    fn oversized_pad_is_corrupt() {
        assert!(matches!(decode(&[8, 0xFF]), Err(CodecError::Corrupt(_))));
        assert!(matches!(decode(&[3]), Err(CodecError::Corrupt(_))));
    }

    #[test]
    fn partial_block_is_corrupt() {
        // 8 - 1 = 7 remaining bits cannot hold whole 4-bit blocks.
        assert_eq!(
            decode(&[1, 0xFF]),
            Err(CodecError::Corrupt("partial run block"))
        );
    }

    #[test]
    fn misaligned_bit_total_is_corrupt() {
        // A single block of four bits reconstructs half a byte.
        assert_eq!(
            decode(&[4, 0b1011_0000]),
            Err(CodecError::Corrupt("run lengths do not add up to whole bytes"))
        );
    }
}
