//! Lossless compression codecs: Huffman prefix coding and LZW dictionary coding.
//!
//! ```rust
//! use huffzw::{huffman, lzw};
//!
//! let input = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let packed = huffman::compress_slice(input).unwrap();
//! assert_eq!(huffman::decompress_slice(&packed).unwrap(), input);
//!
//! let codes = lzw::compress(input);
//! assert_eq!(lzw::decompress(&codes).unwrap(), input);
//! ```

pub mod cs;

pub use cs::compression::{huffman, lzw, Codec, Compression};
pub use cs::error::{Error, Result};
