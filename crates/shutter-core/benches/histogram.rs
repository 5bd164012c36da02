//! Benchmarks: line diff throughput on snapshot-shaped text.
//!
//! Run with: cargo bench --package shutter-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shutter_core::diff::histogram;

// ── Data generators ──

/// Pretty-printed-struct style snapshot with blank separators.
fn gen_snapshot(lines: usize) -> String {
    (0..lines)
        .map(|i| match i % 8 {
            0 => format!("Record {{ id: {i},"),
            7 => String::new(),
            6 => "}".to_string(),
            k => format!("    field_{k}: \"value {i}\","),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Same snapshot with every 50th line edited.
fn gen_edited(lines: usize) -> String {
    gen_snapshot(lines)
        .split('\n')
        .enumerate()
        .map(|(i, l)| if i % 50 == 25 { format!("{l} // edited") } else { l.to_string() })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    for &lines in &[100usize, 1_000, 10_000] {
        let old = gen_snapshot(lines);
        let new = gen_edited(lines);
        group.throughput(Throughput::Bytes((old.len() + new.len()) as u64));
        group.bench_with_input(BenchmarkId::new("edited", lines), &lines, |b, _| {
            b.iter(|| histogram(black_box(&old), black_box(&new)))
        });
        group.bench_with_input(BenchmarkId::new("identical", lines), &lines, |b, _| {
            b.iter(|| histogram(black_box(&old), black_box(&old)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_histogram);
criterion_main!(benches);
