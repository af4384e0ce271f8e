use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stride_decode::cli::Args;
use stride_decode_domain::{PairSorter, decode};

fn sample_lines(n: usize) -> Vec<String> {
    (0..n).rev().map(|i| format!("{i} word{i}")).collect()
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["stride_decode", "input.txt"])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_sort_and_decode(c: &mut Criterion) {
    let lines = sample_lines(10_000);
    c.bench_function("sort_and_decode_10k", |b| {
        b.iter(|| {
            let outcome = PairSorter::default().sort(black_box(&lines)).unwrap();
            black_box(decode(&outcome.pairs));
        })
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_sort_and_decode);
criterion_main!(benches);
