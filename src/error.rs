//! The single error type shared by every codec and transform in the crate.
//!
//! Decoders never produce partial output: any call either returns the fully
//! reconstructed buffer or one of these errors. The kinds are deliberately
//! coarse so callers (the CLI, the tests) can match on what went wrong
//! without caring which codec reported it.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The input ended in the middle of a field during decode.
    #[error("truncated input: {0}")]
    Truncated(&'static str),

    /// A structural invariant of the on-disk format was violated.
    #[error("corrupt input: {0}")]
    Corrupt(&'static str),

    /// The LZW dictionary hit its entry limit under the Abort policy.
    #[error("dictionary limit of {0} entries exceeded")]
    OutOfMemory(usize),

    /// A caller-supplied option was out of range.
    #[error("invalid option: {0}")]
    InvalidOption(&'static str),

    /// File level failure. Only the CLI layer produces this variant.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}
