//! Ordered composition of transforms with a terminal codec.
//!
//! Compression runs every transform forward, in order, then encodes.
//! Decompression decodes first, then runs the inverses in reverse order.
//! The pipeline owns the ordering; every stage stays a pure function and no
//! state survives a call.

use crate::error::CodecError;
use crate::transform::Transform;

use super::lzw::{self, LzwOptions};
use super::{huffman, rle};

/// The coder that terminates a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Rle,
    Huffman,
    Lzw(LzwOptions),
}

impl Codec {
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Rle => Ok(rle::encode(data)),
            Codec::Huffman => Ok(huffman::encode(data)),
            Codec::Lzw(options) => lzw::encode(data, options),
        }
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Rle => rle::decode(data),
            Codec::Huffman => huffman::decode(data),
            Codec::Lzw(options) => lzw::decode(data, options),
        }
    }
}

/// A transform chain feeding a terminal codec.
#[derive(Debug, Clone)]
pub struct Pipeline {
    transforms: Vec<Transform>,
    codec: Codec,
}

impl Pipeline {
    pub fn new(transforms: Vec<Transform>, codec: Codec) -> Self {
        Self { transforms, codec }
    }

    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self.transforms.split_first() {
            None => self.codec.encode(input),
            Some((first, rest)) => {
                let mut data = first.forward(input);
                for transform in rest {
                    data = transform.forward(&data);
                }
                self.codec.encode(&data)
            }
        }
    }

    pub fn decompress(&self, blob: &[u8]) -> Result<Vec<u8>, CodecError> {
        let mut data = self.codec.decode(blob)?;
        for transform in self.transforms.iter().rev() {
            data = transform.inverse(&data)?;
        }
        Ok(data)
    }
}
