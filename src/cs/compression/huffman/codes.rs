use crate::cs::compression::huffman::{PrefixNode, Symbol};
use std::collections::HashMap;

/// Bidirectional mapping between symbols and their prefix codes.
///
/// Codes are strings of `'0'` and `'1'`, most significant (first emitted) bit first.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    codes: HashMap<Symbol, String>,
    symbols: HashMap<String, Symbol>,
}

impl CodeTable {
    /// The code assigned to `symbol`, if it has a leaf in the tree.
    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// The symbol whose code is exactly `bits`.
    pub fn symbol(&self, bits: &str) -> Option<Symbol> {
        self.symbols.get(bits).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }

    fn insert(&mut self, symbol: Symbol, code: String) {
        self.symbols.insert(code.clone(), symbol);
        self.codes.insert(symbol, code);
    }
}

/// Recursively build the code table for a prefix tree.
///
/// The zero branch appends `'0'` and the one branch appends `'1'`. A tree built by
/// [`build_prefix_tree`](crate::cs::compression::huffman::build_prefix_tree) always
/// has an internal root, so every code is at least one bit long.
pub fn build_code_table(node: &PrefixNode) -> CodeTable {
    let mut table = CodeTable::default();
    build_code_table_helper(node, String::new(), &mut table);
    table
}

fn build_code_table_helper(node: &PrefixNode, prefix: String, table: &mut CodeTable) {
    match node {
        PrefixNode::Leaf { symbol, .. } => {
            table.insert(*symbol, prefix);
        }
        PrefixNode::Internal { zero, one, .. } => {
            let mut zero_prefix = prefix.clone();
            zero_prefix.push('0');
            build_code_table_helper(zero, zero_prefix, table);
            let mut one_prefix = prefix;
            one_prefix.push('1');
            build_code_table_helper(one, one_prefix, table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::compression::huffman::{build_prefix_tree, FrequencyTable};

    fn table_for(input: &[u8]) -> CodeTable {
        let tree = build_prefix_tree(&FrequencyTable::from_bytes(input)).unwrap();
        build_code_table(&tree)
    }

    #[test]
    fn test_every_symbol_has_a_code() {
        let input = b"this is an example for huffman encoding";
        let codes = table_for(input);
        for &b in input {
            assert!(codes.code(Symbol::Byte(b)).is_some(), "Missing code for {}", b);
        }
        assert!(codes.code(Symbol::EndOfStream).is_some());
    }

    #[test]
    fn test_no_code_is_a_prefix_of_another() {
        let codes = table_for(b"abracadabra, the quick brown fox jumps over the lazy dog");
        let all: Vec<&str> = codes.iter().map(|(_, c)| c).collect();
        for (i, a) in all.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_both_directions_agree() {
        let codes = table_for(b"hello world");
        for (symbol, code) in codes.iter() {
            assert_eq!(codes.symbol(code), Some(symbol));
        }
        assert_eq!(codes.symbol(""), None);
    }

    #[test]
    fn test_single_repeated_byte() {
        let codes = table_for(b"AAAA");
        assert_eq!(codes.len(), 2);
        let a = codes.code(Symbol::Byte(b'A')).unwrap();
        let eos = codes.code(Symbol::EndOfStream).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(eos.len(), 1);
        assert_ne!(a, eos);
    }

    #[test]
    fn test_lone_end_of_stream_gets_code() {
        let codes = table_for(b"");
        assert_eq!(codes.code(Symbol::EndOfStream), Some("0"));
        assert_eq!(codes.code(Symbol::NotASymbol), Some("1"));
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        let codes = table_for(b"eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeexyz");
        let e = codes.code(Symbol::Byte(b'e')).unwrap().len();
        let x = codes.code(Symbol::Byte(b'x')).unwrap().len();
        assert!(e < x);
    }
}
