//! Criterion benchmarks for DID URI parsing and formatting.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use did_uri::{DidUrl, QueryParams, format, normalize_str, parse};

const CASES: [(&str, &str); 6] = [
    ("minimal", "did:a:b"),
    ("typical", "did:example:123456789abcdefghi"),
    ("idstrings", "did:web:example.com:user:alice:keys"),
    ("with_path", "did:example:123456789abcdefghi/path/to/resource"),
    ("with_query", "did:example:123456789abcdefghi?service=files&version=2"),
    (
        "full",
        "did:example:123456789abcdefghi/path/to/resource?service=files&nested[key]=v#key-1",
    ),
];

/// Benchmark: parse with varying URI shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, uri) in CASES {
        group.throughput(Throughput::Bytes(uri.len() as u64));
        group.bench_with_input(BenchmarkId::new("uri", name), &uri, |b, uri| {
            b.iter(|| parse(black_box(*uri)));
        });
    }

    group.finish();
}

/// Benchmark: format of an already parsed record (includes self-validation)
fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for (name, uri) in CASES {
        let parsed = parse(uri).expect("valid test URI");
        group.bench_with_input(BenchmarkId::new("record", name), &parsed, |b, parsed| {
            b.iter(|| format(black_box(parsed)));
        });
    }

    group.finish();
}

/// Benchmark: normalization of padded legacy-scheme input
fn bench_normalize(c: &mut Criterion) {
    let input = "   did://example:123456789abcdefghi/path\r\n";
    c.bench_function("normalize/legacy_padded", |b| {
        b.iter(|| normalize_str(black_box(input)));
    });
}

/// Benchmark: parameter decoding and the full wrapper
fn bench_decode(c: &mut Criterion) {
    let query = "thing=that&nested[property]=this&list[]=a&list[]=b&name=%41%42%43";
    c.bench_function("decode/query", |b| {
        b.iter(|| QueryParams::parse(black_box(query)));
    });

    let uri = CASES[5].1;
    c.bench_function("did_url/full", |b| {
        b.iter(|| DidUrl::parse(black_box(uri)));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_format,
    bench_normalize,
    bench_decode,
);
criterion_main!(benches);
