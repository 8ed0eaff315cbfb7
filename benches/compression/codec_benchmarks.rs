use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffzw::{huffman, lzw};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_text(len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(12345);
    let words: [&[u8]; 8] = [
        b"the ", b"quick ", b"brown ", b"fox ", b"jumps ", b"over ", b"lazy ", b"dog ",
    ];
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        out.extend_from_slice(words[rng.gen_range(0..words.len())]);
    }
    out.truncate(len);
    out
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");
    for size in [1_000, 10_000, 100_000] {
        let data = generate_text(size);
        let compressed = huffman::compress_slice(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| huffman::compress_slice(black_box(data)).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("decompress", size),
            &compressed,
            |b, compressed| b.iter(|| huffman::decompress_slice(black_box(compressed)).unwrap()),
        );
    }
    group.finish();
}

fn bench_lzw(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw");
    for size in [1_000, 10_000, 100_000] {
        let data = generate_text(size);
        let codes = lzw::compress(&data);
        group.bench_with_input(BenchmarkId::new("compress", size), &data, |b, data| {
            b.iter(|| lzw::compress(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("decompress", size), &codes, |b, codes| {
            b.iter(|| lzw::decompress(black_box(codes)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_huffman, bench_lzw);
criterion_main!(benches);
