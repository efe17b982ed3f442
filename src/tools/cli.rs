//! Command line definition for the squish binary, built on the clap derive
//! API, and the mapping from parsed arguments to a codec pipeline.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::compression::lzw::{DictionarySize, LzwOptions, Overflow};
use crate::compression::pipeline::{Codec, Pipeline};
use crate::transform::Transform;

#[derive(Parser, Debug)]
#[command(
    name = "squish",
    version,
    about = "A whole-buffer file compressor: RLE, LZW and Huffman coding with optional BWT/MTF pre-transforms",
    long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Raise verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a file
    Compress(Job),
    /// Decompress a file
    Decompress(Job),
}

#[derive(clap::Args, Debug)]
pub struct Job {
    /// Compression algorithm
    #[arg(value_enum)]
    pub algorithm: Algorithm,

    /// File to read
    pub input: PathBuf,

    /// File to write
    pub output: PathBuf,

    /// Pre-compression transforms, applied in the order given; repeat the
    /// same flags when decompressing
    #[arg(short = 't', long = "transform", value_enum)]
    pub transforms: Vec<TransformName>,

    /// LZW only: dictionary entry limit (overrides --preset)
    #[arg(long = "max-entries")]
    pub max_entries: Option<usize>,

    /// LZW only: dictionary size preset
    #[arg(long = "preset", value_enum)]
    pub preset: Option<Preset>,

    /// LZW only: what to do when the dictionary fills up
    #[arg(long = "overflow", value_enum, default_value_t = OverflowName::Abort)]
    pub overflow: OverflowName,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Rle,
    Lzw,
    Huffman,
}

impl Algorithm {
    /// Extension enforced on compressed files.
    pub fn extension(&self) -> &'static str {
        match self {
            Algorithm::Rle => "rle",
            Algorithm::Lzw => "lzw",
            Algorithm::Huffman => "huff",
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformName {
    Bwt,
    Mtf,
}

impl From<TransformName> for Transform {
    fn from(name: TransformName) -> Self {
        match name {
            TransformName::Bwt => Transform::Bwt,
            TransformName::Mtf => Transform::Mtf,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowName {
    Abort,
    StopStore,
    Unlimited,
}

// clap needs Display to render the default value in --help.
impl std::fmt::Display for OverflowName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OverflowName::Abort => "abort",
            OverflowName::StopStore => "stop-store",
            OverflowName::Unlimited => "unlimited",
        };
        write!(f, "{}", name)
    }
}

impl From<OverflowName> for Overflow {
    fn from(name: OverflowName) -> Self {
        match name {
            OverflowName::Abort => Overflow::Abort,
            OverflowName::StopStore => Overflow::StopStore,
            OverflowName::Unlimited => Overflow::Unlimited,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Small,
    Medium,
    Large,
    Xl,
}

impl Preset {
    fn entries(self) -> usize {
        match self {
            Preset::Small => DictionarySize::Small.entries(),
            Preset::Medium => DictionarySize::Medium.entries(),
            Preset::Large => DictionarySize::Large.entries(),
            Preset::Xl => DictionarySize::ExtraLarge.entries(),
        }
    }
}

/// Turn a parsed job into the pipeline that will run it.
pub fn build_pipeline(job: &Job) -> Pipeline {
    let codec = match job.algorithm {
        Algorithm::Rle => Codec::Rle,
        Algorithm::Huffman => Codec::Huffman,
        Algorithm::Lzw => {
            let defaults = LzwOptions::default();
            let max_entries = job
                .max_entries
                .or_else(|| job.preset.map(Preset::entries))
                .unwrap_or(defaults.max_entries);
            Codec::Lzw(LzwOptions {
                max_entries,
                overflow: job.overflow.into(),
            })
        }
    };
    let transforms = job.transforms.iter().map(|&t| t.into()).collect();
    Pipeline::new(transforms, codec)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preset_and_override_precedence() {
        let job = Job {
            algorithm: Algorithm::Lzw,
            input: PathBuf::from("in.txt"),
            output: PathBuf::from("out.lzw"),
            transforms: vec![],
            max_entries: Some(42),
            preset: Some(Preset::Large),
            overflow: OverflowName::StopStore,
        };
        let pipeline = build_pipeline(&job);
        let packed = pipeline.compress(b"x").unwrap();
        // max_entries wins over the preset; 42 entries still fit one byte.
        assert_eq!(packed, vec![1, b'x']);
    }

    #[test]
    fn command_line_parses() {
        let args = Args::parse_from([
            "squish",
            "compress",
            "huffman",
            "notes.txt",
            "notes.huff",
            "-t",
            "bwt",
            "-t",
            "mtf",
            "-vv",
        ]);
        assert_eq!(args.verbose, 2);
        let Command::Compress(job) = args.command else {
            panic!("expected a compress command");
        };
        assert_eq!(job.algorithm, Algorithm::Huffman);
        assert_eq!(
            job.transforms,
            vec![TransformName::Bwt, TransformName::Mtf]
        );
    }
}
