//! Huffman prefix coding over byte streams.
//!
//! Compression makes two passes over the input. The first counts byte frequencies
//! (plus an end-of-stream symbol), the second writes each byte's prefix code. The
//! output is a scrambled frequency header followed by the packed bitstream, which
//! ends with the end-of-stream code and is zero-padded to a whole byte.
//!
//! Decompression reads the header, rebuilds the same tree and decodes bits until it
//! reaches the end-of-stream code.
//!
//! # Examples
//!
//! ```
//! use huffzw::cs::compression::huffman::{compress_slice, decompress_slice};
//!
//! let input = b"TOBEORNOTTOBEORTOBEORNOT";
//! let compressed = compress_slice(input).unwrap();
//! let decompressed = decompress_slice(&compressed).unwrap();
//! assert_eq!(decompressed, input);
//! ```

use crate::cs::compression::{Compression, Result};
use crate::cs::error::Error;
use std::io::{BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};

pub mod bits;
pub mod codes;
pub mod frequency;
pub mod header;
pub mod scramble;
pub mod symbol;
pub mod tree;

pub use bits::{BitReader, BitWriter};
pub use codes::{build_code_table, CodeTable};
pub use frequency::{build_frequency_table, FrequencyTable};
pub use header::{read_header, write_header};
pub use scramble::{descramble, scramble};
pub use symbol::Symbol;
pub use tree::{build_prefix_tree, PrefixNode};

/// Encodes every byte of `input` followed by the end-of-stream code.
///
/// Returns the number of input bytes encoded. Fails with `Error::InvalidInput` if
/// a byte has no code, which means the table was built from different data.
pub fn encode<R: Read>(input: &mut R, codes: &CodeTable, output: &mut BitWriter) -> Result<u64> {
    let mut count = 0;
    for byte in BufReader::new(input).bytes() {
        let byte = byte?;
        let code = codes.code(Symbol::Byte(byte)).ok_or_else(|| {
            Error::InvalidInput(format!("Byte 0x{:02x} not in code table", byte))
        })?;
        output.write_code(code);
        count += 1;
    }
    let eos = codes
        .code(Symbol::EndOfStream)
        .ok_or(Error::MissingEndOfStream)?;
    output.write_code(eos);
    Ok(count)
}

/// Decodes symbols from `input` into `output` until the end-of-stream code.
///
/// Bits are accumulated until they spell a known code. Reading never goes past
/// the end of the payload; running out first is `Error::TruncatedStream`. Returns
/// the number of bytes written.
pub fn decode<W: Write>(input: &mut BitReader, codes: &CodeTable, output: &mut W) -> Result<u64> {
    let mut candidate = String::new();
    let mut written = 0;
    while let Some(bit) = input.read_bit() {
        candidate.push(if bit { '1' } else { '0' });
        match codes.symbol(&candidate) {
            Some(Symbol::Byte(b)) => {
                output.write_all(&[b])?;
                written += 1;
                candidate.clear();
            }
            Some(Symbol::EndOfStream) => {
                log::debug!(
                    "end of stream after {} of {} bits",
                    input.bits_read(),
                    input.total_bits()
                );
                return Ok(written);
            }
            Some(Symbol::NotASymbol) => {
                return Err(Error::InvalidInput(
                    "Payload contains the placeholder code".to_string(),
                ))
            }
            None => {}
        }
    }
    Err(Error::TruncatedStream)
}

/// Compresses `input` into `output`, returning `(bytes_in, bytes_out)`.
///
/// The input is read twice. After counting frequencies it is sought back to the
/// position it had on entry, so it must be `Seek`. `output` is written only once
/// the payload has been encoded.
pub fn compress<R: Read + Seek, W: Write>(input: &mut R, output: &mut W) -> Result<(u64, u64)> {
    let start = input.stream_position()?;
    let table = build_frequency_table(input)?;
    let tree = build_prefix_tree(&table)?;
    let codes = build_code_table(&tree);

    let mut header = Vec::new();
    let header_len = write_header(&mut header, &table)?;

    input.seek(SeekFrom::Start(start))?;
    let mut bits = BitWriter::new();
    let bytes_in = encode(input, &codes, &mut bits)?;
    let payload = bits.into_bytes();
    // Nothing reaches `output` unless both passes succeeded.
    output.write_all(&header)?;
    output.write_all(&payload)?;

    let bytes_out = header_len + payload.len() as u64;
    log::debug!(
        "huffman: {} bytes -> {} bytes ({} header, {} codes, max depth {})",
        bytes_in,
        bytes_out,
        header_len,
        codes.len(),
        tree.depth()
    );
    Ok((bytes_in, bytes_out))
}

/// Decompresses `input` into `output`, returning `(bytes_in, bytes_out)`.
///
/// The whole input is buffered; everything after the header is payload.
pub fn decompress<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(u64, u64)> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;

    let mut cursor = Cursor::new(data.as_slice());
    let table = read_header(&mut cursor)?;
    let tree = build_prefix_tree(&table)?;
    let codes = build_code_table(&tree);

    let payload = &data[cursor.position() as usize..];
    let mut bits = BitReader::new(payload);
    let mut writer = BufWriter::new(output);
    let bytes_out = decode(&mut bits, &codes, &mut writer)?;
    writer.flush()?;

    log::debug!("huffman: {} bytes -> {} bytes", data.len(), bytes_out);
    Ok((data.len() as u64, bytes_out))
}

/// Compresses a buffer.
pub fn compress_slice(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    compress(&mut Cursor::new(data), &mut out)?;
    Ok(out)
}

/// Decompresses a buffer produced by [`compress_slice`] or [`compress`].
pub fn decompress_slice(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    decompress(&mut Cursor::new(data), &mut out)?;
    Ok(out)
}

/// Huffman codec behind the [`Compression`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct Huffman;

impl Compression for Huffman {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress_slice(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress_slice(data)
    }
}
