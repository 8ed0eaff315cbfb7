//! Frequency-table header written in front of the Huffman payload.
//!
//! Layout: an ASCII decimal pair count `N` and a space, then `N` entries of one raw
//! symbol byte, an ASCII decimal count and a space. The end-of-stream symbol is not
//! written; its count is always 1. Entries are scrambled before writing and
//! descrambled after reading.

use crate::cs::compression::huffman::scramble::{descramble, scramble};
use crate::cs::compression::huffman::{FrequencyTable, Symbol};
use crate::cs::compression::Result;
use crate::cs::error::Error;
use std::io::{ErrorKind, Read, Write};

const SEPARATOR: u8 = b' ';

/// Writes the scrambled form of `table` and returns the number of bytes written.
///
/// The caller's table is left untouched. Fails with `Error::MissingEndOfStream`
/// before writing anything if the table has no end-of-stream entry.
pub fn write_header<W: Write>(output: &mut W, table: &FrequencyTable) -> Result<u64> {
    let mut scrambled = table.clone();
    scramble(&mut scrambled);

    if !scrambled.contains(Symbol::EndOfStream) {
        return Err(Error::MissingEndOfStream);
    }
    if scrambled.contains(Symbol::NotASymbol) {
        return Err(Error::InvalidInput(
            "Placeholder symbol cannot be written to a header".to_string(),
        ));
    }

    let mut buf = format!("{}", scrambled.len() - 1).into_bytes();
    buf.push(SEPARATOR);
    for (symbol, count) in &scrambled {
        if let Some(b) = symbol.as_byte() {
            buf.push(b);
            buf.extend_from_slice(count.to_string().as_bytes());
            buf.push(SEPARATOR);
        }
    }

    output.write_all(&buf)?;
    log::debug!(
        "wrote header: {} entries in {} bytes",
        scrambled.len() - 1,
        buf.len()
    );
    Ok(buf.len() as u64)
}

/// Reads a header written by [`write_header`], leaving `input` positioned at the
/// first payload byte.
///
/// The returned table is descrambled and always contains end-of-stream with count 1.
pub fn read_header<R: Read>(input: &mut R) -> Result<FrequencyTable> {
    let entries = read_decimal(input, "entry count")?;
    let mut table = FrequencyTable::new();
    // End-of-stream contributes 1; the tree builder sums every count.
    let mut total: u64 = 1;

    for i in 0..entries {
        let b = read_byte(input)?.ok_or_else(|| {
            Error::MalformedHeader(format!("header ends before entry {} of {}", i + 1, entries))
        })?;
        let count = read_decimal(input, "symbol count")?;
        total = total
            .checked_add(count)
            .ok_or_else(|| Error::MalformedHeader("symbol counts overflow".to_string()))?;
        if table.insert(Symbol::Byte(b), count).is_some() {
            return Err(Error::MalformedHeader(format!(
                "symbol 0x{:02x} appears more than once",
                b
            )));
        }
    }

    table.insert(Symbol::EndOfStream, 1);
    descramble(&mut table);
    log::debug!("read header: {} symbols", table.len());
    Ok(table)
}

fn read_byte<R: Read>(input: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Reads ASCII digits up to and including the separating space.
fn read_decimal<R: Read>(input: &mut R, what: &str) -> Result<u64> {
    let mut value: u64 = 0;
    let mut digits = 0;
    loop {
        match read_byte(input)? {
            Some(SEPARATOR) if digits > 0 => return Ok(value),
            Some(b @ b'0'..=b'9') => {
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(u64::from(b - b'0')))
                    .ok_or_else(|| Error::MalformedHeader(format!("{} overflows", what)))?;
                digits += 1;
            }
            Some(b) => {
                return Err(Error::MalformedHeader(format!(
                    "unexpected byte 0x{:02x} in {}",
                    b, what
                )))
            }
            None => {
                return Err(Error::MalformedHeader(format!(
                    "header ends inside {}",
                    what
                )))
            }
        }
    }
}
