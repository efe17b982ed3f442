//! The bitstream module is the bit-level I/O layer shared by every codec in squish.
//!
//! All three coders produce output that is not byte aligned: RLE emits 4-bit
//! blocks, Huffman emits variable-length codes, and the Huffman tree itself is
//! serialized as 10-bit records. The writer packs (value, width) pairs into
//! bytes most-significant-bit first and reports how many zero bits were needed
//! to pad the final byte; the reader consumes the same widths back out and
//! refuses to read past the declared end of the stream.
//!
//! The pad count is *reported*, never embedded: each codec decides where in
//! its own header the count lives.

pub mod bitreader;
pub mod bitwriter;
