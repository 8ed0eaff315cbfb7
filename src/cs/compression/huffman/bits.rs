//! Single-bit sink and source for the Huffman payload.
//!
//! Bits are packed most significant first within each byte, and the final byte is
//! padded with zeros.

use bitvec::prelude::*;

/// Accumulates bits one at a time.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Writes a code given as a string of `'0'` and `'1'`, first character first.
    pub fn write_code(&mut self, code: &str) {
        for ch in code.bytes() {
            self.write_bit(ch == b'1');
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Finishes the stream, zero-padding the last byte.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bits.set_uninitialized(false);
        self.bits.into_vec()
    }
}

/// Reads bits one at a time from a byte buffer, never past its end.
#[derive(Debug)]
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReader {
            bits: bytes.view_bits::<Msb0>(),
            pos: 0,
        }
    }

    /// Returns the next bit, or `None` once every available bit has been read.
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.pos >= self.bits.len() {
            return None;
        }
        let bit = self.bits[self.pos];
        self.pos += 1;
        Some(bit)
    }

    /// Total number of bits in the underlying buffer (bytes × 8).
    pub fn total_bits(&self) -> usize {
        self.bits.len()
    }

    pub fn bits_read(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }
}
