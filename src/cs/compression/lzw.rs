use crate::cs::compression::{Compression, Result};
use crate::cs::error::Error;
use std::collections::HashMap;
use std::io::{BufRead, Read, Write};

/// An LZW dictionary code.
pub type Code = u32;

/// Number of single-byte entries the dictionary starts with.
const SEED_CODES: Code = 256;

/// Compresses the input data using the LZW algorithm.
///
/// # Parameters
///
/// - `input`: a slice of bytes to compress.
///
/// # Returns
///
/// A vector of codes representing the compressed data.
///
/// # Details
///
/// The dictionary is initialized with all 256 possible single-byte sequences.
/// Then, the algorithm keeps the longest sequence `w` present in the dictionary.
/// For each byte `c`, if `w + c` is known it becomes the new `w`; otherwise the
/// code for `w` is emitted, `w + c` is added under the next free code, and `w`
/// restarts at `c`.
///
/// The dictionary is never capped or reset. Codes are 32 bits wide and the
/// next-code counter wraps if it overflows, after which output is no longer
/// decodable.
///
/// # Example
///
/// ```
/// use huffzw::cs::compression::lzw::compress;
///
/// let input = b"TOBEORNOTTOBE";
/// let compressed = compress(input);
/// assert!(!compressed.is_empty());
/// ```
pub fn compress(input: &[u8]) -> Vec<Code> {
    // Initialize the dictionary with all 256 single-byte sequences.
    let mut dict: HashMap<Vec<u8>, Code> = (0..SEED_CODES).map(|i| (vec![i as u8], i)).collect();
    let mut next_code = SEED_CODES;

    let mut result = Vec::new();
    let mut w: Vec<u8> = Vec::new();
    for &c in input {
        w.push(c);
        if dict.contains_key(&w) {
            continue;
        }
        // w + c is new: emit the code for w and remember w + c.
        let wc = w.clone();
        w.pop();
        if let Some(&code) = dict.get(&w) {
            result.push(code);
        }
        dict.insert(wc, next_code);
        next_code = next_code.wrapping_add(1);
        if next_code == 0 {
            log::warn!("LZW code space exhausted; codes wrap from here on");
        }
        w.clear();
        w.push(c);
    }
    // Output remaining code.
    if let Some(&code) = dict.get(&w) {
        result.push(code);
    }

    log::debug!(
        "lzw: {} bytes -> {} codes, dictionary holds {} entries",
        input.len(),
        result.len(),
        dict.len()
    );
    result
}

/// Decompresses a sequence of LZW codes back into the original byte data.
///
/// # Parameters
///
/// - `codes`: a slice of codes produced by the `compress` function.
///
/// # Returns
///
/// The decompressed bytes, or `Error::BadCode` for a code that is neither in the
/// dictionary nor the next one to be assigned.
///
/// # Details
///
/// The dictionary is initialized with all 256 single-byte sequences.
/// Then, for each code read, the corresponding dictionary entry is output.
/// The dictionary is updated by appending the first byte of the current entry
/// to the previous entry. A code equal to the next free code refers to the entry
/// being built, which is the previous entry plus its own first byte.
///
/// # Example
///
/// ```
/// use huffzw::cs::compression::lzw::{compress, decompress};
///
/// let input = b"TOBEORNOTTOBE";
/// let compressed = compress(input);
/// let decompressed = decompress(&compressed).unwrap();
/// assert_eq!(decompressed, input);
/// ```
pub fn decompress(codes: &[Code]) -> Result<Vec<u8>> {
    // Initialize the dictionary with all 256 single-byte sequences.
    let mut dict: Vec<Vec<u8>> = (0..SEED_CODES).map(|i| vec![i as u8]).collect();
    let mut result = Vec::new();

    // Handle first code.
    let Some((&first, rest)) = codes.split_first() else {
        return Ok(result);
    };
    let mut w = match dict.get(first as usize) {
        Some(entry) => entry.clone(),
        None => {
            return Err(Error::BadCode {
                code: first,
                next: SEED_CODES,
            })
        }
    };
    result.extend_from_slice(&w);

    for &code in rest {
        let next = dict.len();
        let entry = match (code as usize).cmp(&next) {
            std::cmp::Ordering::Less => dict[code as usize].clone(),
            std::cmp::Ordering::Equal => {
                // Special case: code refers to the entry about to be added.
                let mut temp = w.clone();
                temp.push(w[0]);
                temp
            }
            std::cmp::Ordering::Greater => {
                return Err(Error::BadCode {
                    code,
                    next: next as Code,
                })
            }
        };
        result.extend_from_slice(&entry);
        // Add new dictionary entry: w + first byte of entry.
        let mut new_entry = w;
        new_entry.push(entry[0]);
        dict.push(new_entry);
        w = entry;
    }

    log::debug!(
        "lzw: {} codes -> {} bytes, dictionary holds {} entries",
        codes.len(),
        result.len(),
        dict.len()
    );
    Ok(result)
}

/// Writes codes as ASCII decimal integers, one per line, with no newline after
/// the last one.
pub fn write_codes<W: Write>(codes: &[Code], output: &mut W) -> Result<()> {
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            output.write_all(b"\n")?;
        }
        write!(output, "{}", code)?;
    }
    Ok(())
}

/// Reads codes written by [`write_codes`].
///
/// Blank lines, `\r` line endings and stray NUL bytes are tolerated; anything
/// else that is not a decimal integer is `Error::MalformedCodeStream`.
pub fn read_codes<R: BufRead>(input: R) -> Result<Vec<Code>> {
    let mut codes = Vec::new();
    for (line_no, line) in input.split(b'\n').enumerate() {
        let line = line?;
        let digits: Vec<u8> = line
            .into_iter()
            .filter(|&b| b != 0 && b != b'\r')
            .collect();
        if digits.is_empty() {
            continue;
        }
        let code = std::str::from_utf8(&digits)
            .ok()
            .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|s| s.parse::<Code>().ok())
            .ok_or_else(|| {
                Error::MalformedCodeStream(format!(
                    "line {}: {:?} is not a code",
                    line_no + 1,
                    String::from_utf8_lossy(&digits)
                ))
            })?;
        codes.push(code);
    }
    Ok(codes)
}

/// Compresses `input` into line-delimited code text, returning `(bytes_in, bytes_out)`.
pub fn compress_stream<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(u64, u64)> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    let mut text = Vec::new();
    write_codes(&compress(&data), &mut text)?;
    output.write_all(&text)?;
    Ok((data.len() as u64, text.len() as u64))
}

/// Decompresses line-delimited code text, returning `(bytes_in, bytes_out)`.
pub fn decompress_stream<R: Read, W: Write>(input: &mut R, output: &mut W) -> Result<(u64, u64)> {
    let mut text = Vec::new();
    input.read_to_end(&mut text)?;
    let codes = read_codes(text.as_slice())?;
    let data = decompress(&codes)?;
    output.write_all(&data)?;
    Ok((text.len() as u64, data.len() as u64))
}

/// Compresses a buffer into line-delimited code text.
pub fn compress_slice(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_codes(&compress(data), &mut out)?;
    Ok(out)
}

/// Decompresses line-delimited code text.
pub fn decompress_slice(text: &[u8]) -> Result<Vec<u8>> {
    decompress(&read_codes(text)?)
}

/// LZW codec behind the [`Compression`] trait, using the text framing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lzw;

impl Compression for Lzw {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        compress_slice(data)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        decompress_slice(data)
    }
}
