//! Benchmarks for docsum extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks extract text from synthetic in-memory documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docsum::ExtractorRegistry;
use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;

/// Creates a .docx with the given number of paragraphs.
fn create_test_docx(paragraph_count: usize) -> Vec<u8> {
    let mut docx = Docx::new();
    for i in 0..paragraph_count {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(format!(
            "Paragraph {} - benchmark content for docsum extraction measurement.",
            i + 1
        ))));
    }
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).unwrap();
    cursor.into_inner()
}

/// Benchmark suffix-based format detection.
fn bench_format_detection(c: &mut Criterion) {
    c.bench_function("detect_supported", |b| {
        b.iter(|| docsum::DocumentFormat::from_name(black_box("quarterly-report.docx")).unwrap());
    });

    c.bench_function("detect_unsupported", |b| {
        b.iter(|| docsum::DocumentFormat::from_name(black_box("quarterly-report.xlsx")).is_none());
    });
}

/// Benchmark .docx extraction at various sizes.
fn bench_docx_extraction(c: &mut Criterion) {
    let registry = ExtractorRegistry::with_defaults();
    let mut group = c.benchmark_group("docx_extraction");

    for paragraph_count in [10, 100, 1000].iter() {
        let data = create_test_docx(*paragraph_count);

        group.bench_function(format!("{}_paragraphs", paragraph_count), |b| {
            b.iter(|| registry.read_bytes(black_box(&data), "docx").unwrap());
        });
    }

    group.finish();
}

/// Benchmark plain-text decoding.
fn bench_text_extraction(c: &mut Criterion) {
    let registry = ExtractorRegistry::with_defaults();
    let data = "Lorem ipsum dolor sit amet. ".repeat(10_000).into_bytes();

    c.bench_function("text_280k", |b| {
        b.iter(|| registry.read_bytes(black_box(&data), "txt").unwrap());
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_docx_extraction,
    bench_text_extraction,
);
criterion_main!(benches);
