use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffcode::{huffman_decode, huffman_encode, CodeTable, CodeTree, FrequencyTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_text(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet: Vec<char> = "etaoinshrdlu cmfwypvbgkqjxz".chars().collect();
    (0..len)
        .map(|_| {
            let i = rng.gen_range(0..alphabet.len());
            alphabet[rng.gen_range(0..=i)]
        })
        .collect()
}

fn bench_huffman(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman");

    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(size, 42);

        group.bench_with_input(BenchmarkId::new("build_tree", size), &text, |b, text| {
            let freq = FrequencyTable::from_text(text);
            b.iter(|| CodeTree::build(black_box(&freq)).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("encode", size), &text, |b, text| {
            b.iter(|| huffman_encode(black_box(text)).unwrap());
        });

        let output = huffman_encode(&text).unwrap();
        group.bench_with_input(BenchmarkId::new("decode", size), &output, |b, output| {
            b.iter(|| huffman_decode(black_box(&output.encoded), &output.code_table).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("code_table", size), &output, |b, output| {
            b.iter(|| CodeTable::from_tree(black_box(&output.tree)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_huffman);
criterion_main!(benches);
