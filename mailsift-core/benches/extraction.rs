//! Benchmark for extraction throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailsift_core::{extract, report};

fn sample_text(repeat: usize) -> String {
    let paragraph = "Hi team, please loop in alice@example.com and BOB@Test.co.uk.\n\
        Old address: first.last+news@mail.sub.example.org (retired).\n\
        Nothing to see here, just prose with an @ sign and x@y fragments.\n";
    paragraph.repeat(repeat)
}

fn bench_extract_small(c: &mut Criterion) {
    let text = sample_text(1);
    c.bench_function("extract_single_paragraph", |b| {
        b.iter(|| black_box(extract(black_box(&text))))
    });
}

fn bench_extract_large(c: &mut Criterion) {
    let text = sample_text(10_000);
    c.bench_function("extract_10k_paragraphs", |b| {
        b.iter(|| black_box(extract(black_box(&text))))
    });
}

fn bench_render(c: &mut Criterion) {
    let text: String = (0..5_000)
        .map(|i| format!("user{}@host{}.example.com ", i, i % 97))
        .collect();
    let emails = extract(&text);
    c.bench_function("render_5k_unique", |b| {
        b.iter(|| black_box(report::render(black_box(&emails))))
    });
}

criterion_group!(benches, bench_extract_small, bench_extract_large, bench_render);
criterion_main!(benches);
