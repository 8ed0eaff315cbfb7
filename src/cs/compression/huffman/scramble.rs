//! Reversible transposition of a frequency table.
//!
//! Every byte symbol `s` trades its count with `|s - 255|`. The permutation is fixed
//! and easy to guess; it only keeps the header from being read at a glance.
//! Sentinel symbols are left in place.

use crate::cs::compression::huffman::{FrequencyTable, Symbol};
use std::collections::HashSet;

/// Swaps the counts of every paired byte symbol in place.
///
/// Each unordered pair is visited once. When only one side of a pair has an entry,
/// the entry moves to the other side instead of being duplicated, so the table keeps
/// its size.
pub fn transpose(table: &mut FrequencyTable) {
    let byte_symbols: Vec<Symbol> = table
        .symbols()
        .filter(|s| matches!(s, Symbol::Byte(_)))
        .collect();
    let mut visited = HashSet::new();

    for symbol in byte_symbols {
        let Some(partner) = symbol.paired() else {
            continue;
        };
        if visited.contains(&symbol) {
            continue;
        }
        visited.insert(symbol);
        visited.insert(partner);

        let own = table.remove(symbol);
        let other = table.remove(partner);
        if let Some(count) = own {
            table.insert(partner, count);
        }
        if let Some(count) = other {
            table.insert(symbol, count);
        }
    }
}

/// Applies the transposition before a table is written.
pub fn scramble(table: &mut FrequencyTable) {
    transpose(table);
}

/// Undoes [`scramble`]. The transposition is its own inverse.
pub fn descramble(table: &mut FrequencyTable) {
    transpose(table);
}
