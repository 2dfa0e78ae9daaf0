//! Benchmarks for the chatlens pipeline stages.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analysis -- classify`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::config::AnalyzerConfig;
use chatlens::core::features::extract_all;
use chatlens::core::output::to_text;
use chatlens::core::{Corpus, aggregate, normalize_all};
use chatlens::encoding::{Encoding, resolve};
use chatlens::parsing::LineClassifier;
use chatlens::pipeline::Analyzer;

// =============================================================================
// Test Data Generators
// =============================================================================

const SENDERS: [&str; 4] = ["Alice", "Bob", "Carlos", "Dana"];
const TEXTS: [&str; 5] = [
    "Hola, ¿cómo estás?",
    "see https://example.com for details 😂",
    "<Media omitted>",
    "ok 👍👍",
    "Meeting at 10, don't be late!",
];

fn generate_transcript(count: usize) -> String {
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let day = i / 200 % 28 + 1;
        let month = i / 5600 % 12 + 1;
        let sender = SENDERS[i % SENDERS.len()];
        let text = TEXTS[i % TEXTS.len()];
        let line = match i % 3 {
            0 => format!("{day}/{month}/23, {}:{:02} - {sender}: {text}", i % 24, i % 60),
            1 => format!("[{day}/{month}/23, {}:{:02}:00] {sender}: {text}", i % 24, i % 60),
            _ => format!("{day}/{month}/2023 {}:{:02} - {sender}: {text}", i % 24, i % 60),
        };
        lines.push(line);
        if i % 10 == 0 {
            lines.push("continuation line without a timestamp".to_string());
        }
    }
    lines.join("\n")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let utf8 = generate_transcript(10_000).into_bytes();
    let mut legacy = utf8.clone();
    legacy.push(0xE9);

    group.throughput(Throughput::Bytes(utf8.len() as u64));
    group.bench_function("utf8", |b| {
        b.iter(|| resolve(black_box(&utf8), Encoding::default_order()).unwrap());
    });
    group.bench_function("windows1252_fallback", |b| {
        b.iter(|| resolve(black_box(&legacy), Encoding::default_order()).unwrap());
    });
    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let classifier = LineClassifier::new();

    for count in [1_000, 10_000, 100_000] {
        let text = generate_transcript(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| classifier.classify(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("features");
    let text = generate_transcript(50_000);
    let classification = LineClassifier::new().classify(&text).unwrap();
    let records = normalize_all(&classification.lines).unwrap();

    group.throughput(Throughput::Elements(records.len() as u64));
    for parallel in [false, true] {
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| extract_all(black_box(records.clone()), parallel));
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let text = generate_transcript(50_000);
    let classification = LineClassifier::new().classify(&text).unwrap();
    let records = normalize_all(&classification.lines).unwrap();
    let corpus = Corpus::new(extract_all(records, true));
    let config = AnalyzerConfig::default();

    c.bench_function("aggregate", |b| {
        b.iter(|| aggregate(black_box(&corpus), &config).unwrap());
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let analyzer = Analyzer::new();

    for count in [1_000, 10_000, 100_000] {
        let bytes = generate_transcript(count).into_bytes();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| {
                let analysis = analyzer.analyze_bytes(black_box(bytes)).unwrap();
                to_text(&analysis, 10)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_decode,
    bench_classify,
    bench_features,
    bench_aggregate,
    bench_full_pipeline
);
criterion_main!(benches);
