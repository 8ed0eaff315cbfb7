//! Error type shared by every codec in the crate.

use crate::cs::compression::lzw::Code;
use thiserror::Error;

/// Errors produced while compressing or decompressing.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied data the operation cannot work with.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A frequency table reached the header writer without an end-of-stream entry.
    #[error("frequency table has no end-of-stream entry")]
    MissingEndOfStream,

    /// The frequency header in front of a Huffman payload could not be parsed.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The Huffman payload ran out of bits before the end-of-stream code.
    #[error("bit stream ended before the end-of-stream code")]
    TruncatedStream,

    /// An LZW code that is neither in the dictionary nor the next code to be assigned.
    #[error("bad compressed code {code} (next code is {next})")]
    BadCode { code: Code, next: Code },

    /// LZW code text that is not a sequence of decimal integers.
    #[error("malformed code stream: {0}")]
    MalformedCodeStream(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidInput("empty table".to_string()).to_string(),
            "Invalid input: empty table"
        );
        assert_eq!(
            Error::BadCode { code: 300, next: 260 }.to_string(),
            "bad compressed code 300 (next code is 260)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
