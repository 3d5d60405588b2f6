use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huffpack::huffman::{estimate_window_bits, pack_bits, Bits, HuffmanEncoder};
use huffpack::Compression;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Geometric;

fn skewed_data(len: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let dist = Geometric::new(0.1).unwrap();
    (0..len).map(|_| rng.sample(dist).min(255) as u8).collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_compress");
    let encoder = HuffmanEncoder::default();
    for size in [1_000, 10_000, 100_000] {
        let text = b"the quick brown fox jumps over the lazy dog ".repeat(size / 44 + 1);
        let skewed = skewed_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("text", size), &text[..size], |b, data| {
            b.iter(|| encoder.compress(black_box(data)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("skewed", size), &skewed, |b, data| {
            b.iter(|| encoder.compress(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let bits: Bits = (0..1 << 16).map(|_| rng.gen_bool(0.5)).collect();
    c.bench_function("huffman_pack_64k_bits", |b| b.iter(|| pack_bits(black_box(&bits))));
}

fn bench_window_estimate(c: &mut Criterion) {
    let data = skewed_data(50_000);
    c.bench_function("huffman_window_estimate_4", |b| {
        b.iter(|| estimate_window_bits(black_box(&data), 4).unwrap())
    });
}

criterion_group!(benches, bench_compress, bench_pack, bench_window_estimate);
criterion_main!(benches);
