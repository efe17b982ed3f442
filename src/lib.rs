//! Squish: a whole-buffer compression toolkit.
//!
//! - Three lossless coders: bit-level RLE, LZW with a configurable memory
//!   policy, and Huffman coding with the tree serialized in-band.
//! - Two reversible pre-transforms: the Burrows-Wheeler Transform (driven by
//!   a linear-time SA-IS suffix sort) and Move-To-Front.
//! - A pipeline that chains any transform sequence in front of any coder and
//!   guarantees `decompress(compress(x)) == x`.
//!
//! Basic usage from the command line:
//!
//! ```text
//! $> squish compress huffman notes.txt notes.huff -t bwt -t mtf
//! $> squish decompress huffman notes.huff notes.txt -t bwt -t mtf
//! ```
//!
//! From code, build a [`compression::pipeline::Pipeline`]:
//!
//! ```
//! use squish::compression::pipeline::{Codec, Pipeline};
//! use squish::transform::Transform;
//!
//! let pipeline = Pipeline::new(vec![Transform::Bwt, Transform::Mtf], Codec::Rle);
//! let packed = pipeline.compress(b"banana").unwrap();
//! assert_eq!(pipeline.decompress(&packed).unwrap(), b"banana");
//! ```
//!
//! Every operation is a pure function of its inputs: no global state, no
//! logging in the core, identical output for identical input.

#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod tools;
pub mod transform;

pub use error::CodecError;
