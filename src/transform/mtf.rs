//! Move-To-Front transform.
//!
//! The stack starts as the identity permutation of 0..=255. Every input byte
//! is replaced by its current position in the stack and then moved to the
//! front, so recently seen values encode as small numbers and runs encode as
//! zeros. The inverse replays the same stack discipline from indices.

/// Replace each byte with its recency index. Output length equals input length.
pub fn forward(data: &[u8]) -> Vec<u8> {
    let mut stack = identity_stack();
    let mut out = Vec::with_capacity(data.len());
    for &byte in data {
        // The stack always holds all 256 values, so the search cannot fail.
        let idx = stack.iter().position(|&s| s == byte).unwrap();
        out.push(idx as u8);
        stack.copy_within(0..idx, 1);
        stack[0] = byte;
    }
    out
}

/// Replay the stack from recency indices to recover the original bytes.
pub fn inverse(indices: &[u8]) -> Vec<u8> {
    let mut stack = identity_stack();
    let mut out = Vec::with_capacity(indices.len());
    for &idx in indices {
        let byte = stack[idx as usize];
        out.push(byte);
        stack.copy_within(0..idx as usize, 1);
        stack[0] = byte;
    }
    out
}

fn identity_stack() -> [u8; 256] {
    std::array::from_fn(|i| i as u8)
}
