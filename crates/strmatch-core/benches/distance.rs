use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strmatch_core::distance::{bit_parallel, dynamic};
use strmatch_core::{sort_by_similarity, BIT_PARALLEL_THRESHOLD};

fn pair(len: usize) -> (Vec<char>, Vec<char>) {
    let a: Vec<char> = (0..len).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let b: Vec<char> = a.iter().rev().copied().collect();
    (a, b)
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");
    for len in [8, 16, BIT_PARALLEL_THRESHOLD - 1, 48] {
        let (a, b) = pair(len);
        group.bench_with_input(BenchmarkId::new("bit_parallel", len), &len, |bench, _| {
            bench.iter(|| bit_parallel(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("dynamic", len), &len, |bench, _| {
            bench.iter(|| dynamic(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let candidates: Vec<String> = (0..2000).map(|i| format!("candidate_{:04}", i)).collect();
    c.bench_function("sort_by_similarity_2000", |bench| {
        bench.iter(|| sort_by_similarity(black_box(&candidates), "candidate_1234", None))
    });
}

criterion_group!(benches, bench_kernels, bench_ranking);
criterion_main!(benches);
