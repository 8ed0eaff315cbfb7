//! Compression algorithms implementation.
//!
//! This module provides two independent lossless codecs over byte streams:
//! - Huffman prefix coding with a scrambled frequency-table header
//! - LZW dictionary coding with a line-delimited decimal code framing
//!
//! # Examples
//!
//! ```rust
//! use huffzw::cs::compression::{Codec, Compression};
//!
//! let input = b"abracadabra abracadabra";
//! for codec in [Codec::Huffman, Codec::Lzw] {
//!     let compressed = codec.compress(input).unwrap();
//!     assert_eq!(codec.decompress(&compressed).unwrap(), input);
//! }
//! ```

use crate::cs::error::Error;
use std::fmt;
use std::str::FromStr;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for compression algorithms
pub trait Compression {
    /// Compress the input data
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompress the compressed data
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod huffman;
pub use huffman::{
    build_code_table, build_frequency_table, build_prefix_tree, read_header, write_header,
    CodeTable, FrequencyTable, Huffman, PrefixNode, Symbol,
};

pub mod lzw;
pub use lzw::{Code, Lzw};

/// Selects one of the available codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Huffman,
    Lzw,
}

impl Codec {
    /// Compresses `input` into `output`, returning `(bytes_in, bytes_out)`.
    pub fn compress_stream<R, W>(self, input: &mut R, output: &mut W) -> Result<(u64, u64)>
    where
        R: std::io::Read + std::io::Seek,
        W: std::io::Write,
    {
        match self {
            Codec::Huffman => huffman::compress(input, output),
            Codec::Lzw => lzw::compress_stream(input, output),
        }
    }

    /// Decompresses `input` into `output`, returning `(bytes_in, bytes_out)`.
    pub fn decompress_stream<R, W>(self, input: &mut R, output: &mut W) -> Result<(u64, u64)>
    where
        R: std::io::Read,
        W: std::io::Write,
    {
        match self {
            Codec::Huffman => huffman::decompress(input, output),
            Codec::Lzw => lzw::decompress_stream(input, output),
        }
    }
}

impl Compression for Codec {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Codec::Huffman => Huffman.compress(data),
            Codec::Lzw => Lzw.compress(data),
        }
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            Codec::Huffman => Huffman.decompress(data),
            Codec::Lzw => Lzw.decompress(data),
        }
    }
}

impl FromStr for Codec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "huffman" | "huff" => Ok(Codec::Huffman),
            "lzw" => Ok(Codec::Lzw),
            other => Err(Error::InvalidInput(format!("Unknown codec: {}", other))),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::Huffman => write!(f, "huffman"),
            Codec::Lzw => write!(f, "lzw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_codec_from_str() {
        assert_eq!("huffman".parse::<Codec>().unwrap(), Codec::Huffman);
        assert_eq!("LZW".parse::<Codec>().unwrap(), Codec::Lzw);
        assert!(matches!(
            "zip".parse::<Codec>(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for codec in [Codec::Huffman, Codec::Lzw] {
            assert_eq!(codec.to_string().parse::<Codec>().unwrap(), codec);
        }
    }

    #[test]
    fn test_stream_dispatch() {
        let input = b"stream dispatch for both codecs";
        for codec in [Codec::Huffman, Codec::Lzw] {
            let mut compressed = Vec::new();
            let (bytes_in, bytes_out) = codec
                .compress_stream(&mut Cursor::new(&input[..]), &mut compressed)
                .unwrap();
            assert_eq!(bytes_in, input.len() as u64);
            assert_eq!(bytes_out, compressed.len() as u64);

            let mut restored = Vec::new();
            codec
                .decompress_stream(&mut Cursor::new(&compressed), &mut restored)
                .unwrap();
            assert_eq!(restored, input);
        }
    }

    #[test]
    fn test_codecs_are_independent() {
        let input = b"TOBEORNOTTOBEORTOBEORNOT";
        let huffman = Codec::Huffman.compress(input).unwrap();
        let lzw = Codec::Lzw.compress(input).unwrap();
        assert_ne!(huffman, lzw);
        assert!(Codec::Lzw.decompress(&huffman).is_err());
    }
}
