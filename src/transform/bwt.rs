//! Burrows-Wheeler Transform with a self-describing frame.
//!
//! The forward direction takes the suffix array of the input, augmented with
//! a conceptual sentinel smaller than every byte (see [`crate::transform::sais`]),
//! drops the sentinel row, and reads off the last column of the sorted
//! rotations. Inverting needs one extra piece of information: the EOF row,
//! the row whose rotation starts at position 0. The frame carries it:
//!
//! ```text
//! delimiter | index bytes (minimal big-endian) | delimiter | transformed data
//! ```
//!
//! Index 0 encodes as zero index bytes, so the empty input produces the
//! two-byte frame `00 00` as the ordinary degenerate case. The delimiter is
//! the smallest byte absent from the index bytes; with at most 8 of them, one
//! always exists.

use super::sais;
use crate::error::CodecError;

/// Transform `data` and wrap the result in a frame the inverse can parse.
pub fn forward(data: &[u8]) -> Vec<u8> {
    let n = data.len();
    let sa = sais::suffix_array(data);

    // Last column of the sorted rotations: the byte to the left of each
    // suffix start, wrapping at position 0. sa[0] is the sentinel row.
    let mut last_column = Vec::with_capacity(n);
    let mut eof_row = 0usize;
    for (row, &suffix) in sa[1..].iter().enumerate() {
        if suffix == 0 {
            eof_row = row;
            last_column.push(data[n - 1]);
        } else {
            last_column.push(data[suffix as usize - 1]);
        }
    }

    let index = minimal_be_bytes(eof_row);
    let delimiter = absent_byte(&index);
    let mut frame = Vec::with_capacity(n + index.len() + 2);
    frame.push(delimiter);
    frame.extend_from_slice(&index);
    frame.push(delimiter);
    frame.extend_from_slice(&last_column);
    frame
}

/// Parse a frame and undo the transform.
pub fn inverse(frame: &[u8]) -> Result<Vec<u8>, CodecError> {
    let (&delimiter, rest) = frame
        .split_first()
        .ok_or(CodecError::Truncated("empty BWT frame"))?;
    let close = rest
        .iter()
        .position(|&b| b == delimiter)
        .ok_or(CodecError::Corrupt("BWT frame missing second delimiter"))?;
    let index = &rest[..close];
    let last_column = &rest[close + 1..];

    let mut eof_row = 0usize;
    for &b in index {
        eof_row = eof_row
            .checked_mul(256)
            .and_then(|v| v.checked_add(b as usize))
            .ok_or(CodecError::Corrupt("BWT index does not fit in memory"))?;
    }

    let n = last_column.len();
    if n == 0 {
        return if eof_row == 0 {
            Ok(Vec::new())
        } else {
            Err(CodecError::Corrupt("BWT index out of range"))
        };
    }
    if eof_row >= n {
        return Err(CodecError::Corrupt("BWT index out of range"));
    }

    // rank[i]: occurrences of last_column[i] earlier in the column.
    let mut rank = vec![0u32; n];
    let mut counts = [0usize; 256];
    for (i, &byte) in last_column.iter().enumerate() {
        rank[i] = counts[byte as usize] as u32;
        counts[byte as usize] += 1;
    }
    // smaller[b]: how many bytes in the column are strictly less than b.
    let mut smaller = [0usize; 256];
    let mut total = 0usize;
    for (byte, slot) in smaller.iter_mut().enumerate() {
        *slot = total;
        total += counts[byte];
    }

    // Walk the column backwards from the EOF row, emitting right to left.
    let mut out = vec![0u8; n];
    let mut row = eof_row;
    for slot in out.iter_mut().rev() {
        let byte = last_column[row];
        *slot = byte;
        row = smaller[byte as usize] + rank[row] as usize;
    }
    Ok(out)
}

/// Minimal big-endian representation; zero encodes as no bytes at all.
fn minimal_be_bytes(value: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut v = value;
    while v > 0 {
        bytes.push((v & 0xFF) as u8);
        v >>= 8;
    }
    bytes.reverse();
    bytes
}

/// Smallest byte value not present in `index`. A 256-bit presence set keeps
/// this O(1) in auxiliary space; `index` is at most 8 bytes, so a free value
/// always exists.
fn absent_byte(index: &[u8]) -> u8 {
    let mut seen = [false; 256];
    for &b in index {
        seen[b as usize] = true;
    }
    seen.iter().position(|&present| !present).unwrap() as u8
}
