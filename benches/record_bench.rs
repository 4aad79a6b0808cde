//! Benchmarks for record construction and reshaping
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use record_dict::{LookupOptions, NormalizeOptions, Record, normalize_keys};
use serde_json::{Value, json};

/// Build a nested document with `width` top-level entries
fn generate_document(width: usize) -> Value {
    let mut root = serde_json::Map::new();
    for i in 0..width {
        root.insert(
            format!("Entry-{i}"),
            json!({
                "id": format!("entry-{}", i),
                "tags": ["alpha", "beta"],
                "place": {
                    "name": format!("Place {}", i),
                    "location": {"lon": i as f64 * 0.5, "lat": 50.0 + i as f64}
                }
            }),
        );
    }
    Value::Object(root)
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for width in [10, 100, 1000].iter() {
        let document = generate_document(*width);
        group.bench_with_input(BenchmarkId::new("from_value", width), &document, |b, doc| {
            b.iter(|| black_box(Record::from_value(doc.clone())));
        });
    }

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for width in [10, 100, 1000].iter() {
        let record = Record::from_value(generate_document(*width)).unwrap();
        group.bench_with_input(BenchmarkId::new("flatten", width), &record, |b, record| {
            b.iter(|| {
                let mut copy = record.clone();
                copy.flatten("_");
                black_box(copy)
            });
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let record = Record::from_value(generate_document(100)).unwrap();
    let options = LookupOptions::default();
    let paths = ["Entry-5.place.missing", "Entry-99.place.location.lat"];

    c.bench_function("lookup_fallthrough", |b| {
        b.iter(|| black_box(record.lookup(black_box(paths), &options)));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let record = Record::from_value(generate_document(100)).unwrap();
    let options = NormalizeOptions::default();

    c.bench_function("normalize_keys", |b| {
        b.iter(|| black_box(normalize_keys(&record, &options)));
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_flatten,
    bench_lookup,
    bench_normalize
);
criterion_main!(benches);
