use std::fmt;

/// The alphabet the Huffman coder works over: every byte value plus two sentinels.
///
/// Ordering places all bytes first (ascending), then `EndOfStream`, then `NotASymbol`.
/// Tree building relies on this order for its tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// A literal byte from the input.
    Byte(u8),
    /// Marks the end of the encoded payload.
    EndOfStream,
    /// Placeholder that never appears in input; pads a single-leaf tree.
    NotASymbol,
}

impl Symbol {
    /// Returns the transposition partner of a byte symbol, `|b - 255|`.
    ///
    /// Sentinels have no partner.
    pub fn paired(self) -> Option<Symbol> {
        match self {
            Symbol::Byte(b) => Some(Symbol::Byte(255 - b)),
            _ => None,
        }
    }

    pub fn as_byte(self) -> Option<u8> {
        match self {
            Symbol::Byte(b) => Some(b),
            _ => None,
        }
    }
}

impl From<u8> for Symbol {
    fn from(b: u8) -> Self {
        Symbol::Byte(b)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(b) if b.is_ascii_graphic() => write!(f, "'{}'", *b as char),
            Symbol::Byte(b) => write!(f, "0x{:02x}", b),
            Symbol::EndOfStream => write!(f, "EOS"),
            Symbol::NotASymbol => write!(f, "NAS"),
        }
    }
}
