//! Benchmark suite for the hint pipeline
//!
//! This benchmark measures:
//! - Declaration extraction over documents of increasing size
//! - Subsequence filtering over large candidate lists
//! - The full scan+filter+rank pipeline as run on every keystroke

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stylesheet_hint_engine::hints::{
    declaration_pattern, filter_candidates, rank_candidates, scan_declarations,
};

/// Generate a stylesheet with `count` variable declarations interleaved
/// with ordinary rules.
fn generate_stylesheet(count: usize) -> String {
    let mut text = String::new();
    for i in 0..count {
        text.push_str(&format!("@var-{i}: {i}px;\n"));
        text.push_str(&format!(".rule-{i} {{ width: @var-{i}; }}\n"));
    }
    text
}

fn bench_extraction(c: &mut Criterion) {
    let pattern = declaration_pattern('@');
    let mut group = c.benchmark_group("extraction");
    for count in [10, 100, 1000] {
        let text = generate_stylesheet(count);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| scan_declarations(&pattern, black_box(text)));
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let pattern = declaration_pattern('@');
    let text = generate_stylesheet(1000);
    let declarations = scan_declarations(&pattern, &text);

    let mut group = c.benchmark_group("filter");
    for query in ["@v", "@var-9", "@v-99"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), query, |b, query| {
            b.iter(|| filter_candidates(black_box(query), '@', declarations.clone()));
        });
    }
    group.finish();
}

fn bench_keystroke_pipeline(c: &mut Criterion) {
    let pattern = declaration_pattern('@');
    let text = generate_stylesheet(500);

    c.bench_function("keystroke_pipeline", |b| {
        b.iter(|| {
            let declarations = scan_declarations(&pattern, black_box(&text));
            let mut candidates = filter_candidates("@var-1", '@', declarations);
            rank_candidates(&mut candidates);
            candidates
        });
    });
}

criterion_group!(
    benches,
    bench_extraction,
    bench_filter,
    bench_keystroke_pipeline
);
criterion_main!(benches);
