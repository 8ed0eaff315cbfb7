use huffzw::cs::compression::huffman::{
    build_code_table, build_prefix_tree, descramble, scramble, FrequencyTable, Symbol,
};
use huffzw::{huffman, lzw, Codec, Compression};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_inputs(seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut inputs = vec![Vec::new(), vec![0], vec![255; 3]];
    for len in [1usize, 2, 7, 64, 500, 4096] {
        // Full byte range.
        inputs.push((0..len).map(|_| rng.gen()).collect());
        // Small alphabet, plenty of repetition.
        inputs.push((0..len).map(|_| rng.gen_range(b'a'..=b'd')).collect());
    }
    inputs
}

#[test]
fn huffman_round_trips_random_inputs() {
    init_logger();
    for input in random_inputs(0x5eed) {
        let compressed = huffman::compress_slice(&input).unwrap();
        assert_eq!(huffman::decompress_slice(&compressed).unwrap(), input);
    }
}

#[test]
fn lzw_round_trips_random_inputs() {
    init_logger();
    for input in random_inputs(0xc0de) {
        let codes = lzw::compress(&input);
        assert_eq!(lzw::decompress(&codes).unwrap(), input);
        let text = lzw::compress_slice(&input).unwrap();
        assert_eq!(lzw::decompress_slice(&text).unwrap(), input);
    }
}

#[test]
fn repeated_byte_round_trips() {
    for codec in [Codec::Huffman, Codec::Lzw] {
        let compressed = codec.compress(b"AAAA").unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap(), b"AAAA");
    }
}

#[test]
fn empty_input_round_trips() {
    let compressed = huffman::compress_slice(b"").unwrap();
    assert_eq!(compressed, b"0 \x00");
    assert!(huffman::decompress_slice(&compressed).unwrap().is_empty());

    assert!(lzw::compress(b"").is_empty());
    assert!(lzw::compress_slice(b"").unwrap().is_empty());
    assert!(lzw::decompress_slice(b"").unwrap().is_empty());
}

#[test]
fn lzw_shrinks_repetitive_input() {
    let input = b"TOBEORNOTTOBEORTOBEORNOT";
    let codes = lzw::compress(input);
    assert!(codes.len() < input.len());
    assert_eq!(lzw::decompress(&codes).unwrap(), input);
}

#[test]
fn huffman_shrinks_skewed_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<u8> = (0..10_000)
        .map(|_| if rng.gen_bool(0.9) { b'e' } else { rng.gen_range(b'a'..=b'z') })
        .collect();
    let compressed = huffman::compress_slice(&input).unwrap();
    assert!(compressed.len() < input.len() / 2);
}

#[test]
fn scramble_is_an_involution_on_random_tables() {
    for input in random_inputs(42) {
        let original = FrequencyTable::from_bytes(&input);
        let mut table = original.clone();
        scramble(&mut table);
        descramble(&mut table);
        assert_eq!(table, original);
    }
}

#[test]
fn prefix_codes_are_prefix_free_on_random_tables() {
    for input in random_inputs(99) {
        let table = FrequencyTable::from_bytes(&input);
        let tree = build_prefix_tree(&table).unwrap();
        assert_eq!(tree.weight(), table.total());

        let codes = build_code_table(&tree);
        for symbol in table.symbols() {
            assert!(codes.code(symbol).is_some());
        }
        let all: Vec<&str> = codes.iter().map(|(_, c)| c).collect();
        for a in &all {
            for b in &all {
                assert!(a == b || !b.starts_with(a));
            }
        }
        if table.len() > 1 {
            assert_eq!(tree.leaf_count(), table.len());
        } else {
            assert_eq!(codes.code(Symbol::EndOfStream), Some("0"));
        }
    }
}

#[test]
fn corrupt_streams_are_rejected() {
    assert!(matches!(
        lzw::decompress(&[66, 999]),
        Err(huffzw::Error::BadCode { .. })
    ));
    assert!(matches!(
        huffman::decompress_slice(b"3 ab"),
        Err(huffzw::Error::MalformedHeader(_))
    ));
}
