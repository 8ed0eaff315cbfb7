use crate::cs::compression::huffman::Symbol;
use crate::cs::compression::Result;
use std::collections::btree_map::{self, BTreeMap};
use std::io::{BufReader, Read};

/// Occurrence counts per [`Symbol`].
///
/// Iteration is in ascending symbol order, which keeps header layout and tree shape
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    /// Creates an empty table. Note that it has no end-of-stream entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the bytes of `data` and adds the end-of-stream entry.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &b in data {
            table.increment(Symbol::Byte(b));
        }
        table.insert(Symbol::EndOfStream, 1);
        table
    }

    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Sets the count for `symbol`, returning the previous count if any.
    pub fn insert(&mut self, symbol: Symbol, count: u64) -> Option<u64> {
        self.counts.insert(symbol, count)
    }

    pub fn remove(&mut self, symbol: Symbol) -> Option<u64> {
        self.counts.remove(&symbol)
    }

    pub fn increment(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Number of distinct symbols, end-of-stream included.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().fold(0, |acc, &c| acc.saturating_add(c))
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Symbol, u64> {
        self.counts.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.counts.keys().copied()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a Symbol, &'a u64);
    type IntoIter = btree_map::Iter<'a, Symbol, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl FromIterator<(Symbol, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, u64)>>(iter: I) -> Self {
        FrequencyTable {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Reads `input` to exhaustion and counts every byte.
///
/// The end-of-stream symbol is always added with a count of 1, so even empty input
/// yields a one-entry table.
pub fn build_frequency_table<R: Read>(input: &mut R) -> Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    for byte in BufReader::new(input).bytes() {
        table.increment(Symbol::Byte(byte?));
    }
    table.insert(Symbol::EndOfStream, 1);
    log::debug!(
        "frequency table: {} distinct symbols over {} bytes",
        table.len(),
        table.total() - 1
    );
    Ok(table)
}
