//! Matcher and suffix array benchmarks
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`
//!
//! The corpus is generated, so no input files are needed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strmatch::{Algorithm, FuzzyMode, SuffixArray};

const SHORT_WORD: &[u8] = b"Julia";
const LONG_WORD: &[u8] = b"Ministerstwo";

const WORDS: &[&str] = &[
    "wojna", "to", "pokój", "wolność", "niewola", "ignorancja", "siła", "Julia", "Winston",
    "Ministerstwo", "Prawdy", "i", "w", "się", "nie", "na", "że", "był",
];

/// Deterministic pseudo-text built from a small vocabulary
fn corpus(words: usize) -> Vec<u8> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut text = Vec::with_capacity(words * 6);
    for _ in 0..words {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        text.extend_from_slice(WORDS[(state % WORDS.len() as u64) as usize].as_bytes());
        text.push(if state % 11 == 0 { b'\n' } else { b' ' });
    }
    text
}

fn bench_exact(c: &mut Criterion) {
    let text = corpus(200_000);

    for (label, pattern) in [("short", SHORT_WORD), ("long", LONG_WORD)] {
        let mut group = c.benchmark_group(format!("exact_{}", label));
        group.throughput(Throughput::Bytes(text.len() as u64));
        for algo in Algorithm::ALL {
            group.bench_with_input(BenchmarkId::from_parameter(algo.name()), &algo, |b, &algo| {
                b.iter(|| {
                    let mut count = 0usize;
                    algo.search(black_box(pattern), black_box(&text), |_| count += 1)
                        .unwrap();
                    count
                })
            });
        }
        group.finish();
    }
}

fn bench_fuzzy(c: &mut Criterion) {
    let text = corpus(100_000);
    let pattern = "pokój".as_bytes();

    let mut group = c.benchmark_group("fuzzy");
    group.throughput(Throughput::Bytes(text.len() as u64));
    for mode in [FuzzyMode::Hamming, FuzzyMode::Edit] {
        for k in [1usize, 2] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode).to_lowercase(), k),
                &k,
                |b, &k| {
                    b.iter(|| {
                        let mut count = 0usize;
                        mode.search(black_box(pattern), black_box(&text), k, |_| count += 1)
                            .unwrap();
                        count
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_suffix_array(c: &mut Criterion) {
    let text = corpus(50_000);

    let mut group = c.benchmark_group("suffix_array");
    group.sample_size(10);
    group.bench_function("build", |b| b.iter(|| SuffixArray::new(black_box(&text))));

    let sa = SuffixArray::new(&text);
    group.bench_function("lookup_all_words", |b| {
        b.iter(|| {
            WORDS
                .iter()
                .map(|w| sa.lookup_all(black_box(w.as_bytes())).unwrap().len())
                .sum::<usize>()
        })
    });
    group.bench_function("boyer_moore_fast_words", |b| {
        b.iter(|| {
            WORDS
                .iter()
                .map(|w| {
                    Algorithm::BoyerMooreFast
                        .find_all(black_box(w.as_bytes()), &text)
                        .unwrap()
                        .len()
                })
                .sum::<usize>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_exact, bench_fuzzy, bench_suffix_array);
criterion_main!(benches);
