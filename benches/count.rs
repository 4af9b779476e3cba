use std::fs;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use linetally::count_lines;
use tempfile::TempDir;

fn benchmark_count_lines(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bench.txt");
    fs::write(&path, "0123456789012345678901234567890123456789\n".repeat(50_000)).unwrap();

    c.bench_function("count_lines_50k", |b| {
        b.iter(|| {
            let count = count_lines(black_box(&path)).unwrap();
            black_box(count);
        })
    });
}

criterion_group!(benches, benchmark_count_lines);
criterion_main!(benches);
