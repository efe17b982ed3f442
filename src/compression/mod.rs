//! The compression module holds the three coders and the pipeline that
//! composes them with the pre-transforms.
//!
//! Every coder is a pure whole-buffer function pair:
//! - rle: bit-level run-length coding in 4-bit blocks. Cheap, and very
//!   effective on the zero-heavy output of BWT followed by MTF.
//! - huffman: frequency-based prefix coding with the tree serialized in
//!   front of the payload as preorder 10-bit records.
//! - lzw: dictionary coding with length-prefixed variable-width codes and a
//!   configurable memory policy.
//!
//! All multi-byte integers in every on-disk format are big-endian, and each
//! format is self-describing: a decoder needs nothing but the buffer (and,
//! for LZW, the same options the encoder ran with).

pub mod huffman;
pub mod lzw;
pub mod pipeline;
pub mod rle;
