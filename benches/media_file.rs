//! Benchmark media file construction and serialization.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mediafile::{MediaFile, MediaFileInput};
use serde_json::json;

fn bench_media_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_file");

    let input = MediaFileInput::new("video/mp4", "https://cdn.example.com/a.mp4")
        .with_dimensions(1920, 1080)
        .with_fps(23.976)
        .with_duration(5400.0)
        .with_channels(6)
        .with_title("Benchmark Movie");

    group.bench_function("new_typed", |b| {
        b.iter(|| MediaFile::new(black_box(input.clone())).unwrap());
    });

    let record = json!({
        "mimeType": "application/vnd.apple.mpegurl",
        "url": "https://cdn.example.com/master.m3u8",
        "width": "1920",
        "height": "1080",
        "fps": "23.976",
        "duration": 5400,
        "is360": 1,
        "stereoscopicLayout": "TOP_BOTTOM",
        "title": "Benchmark Movie",
    });

    group.bench_function("from_json_loose", |b| {
        b.iter(|| MediaFile::from_json(black_box(&record)).unwrap());
    });

    let file = MediaFile::from_json(&record).unwrap();
    group.bench_function("serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&file)).unwrap());
    });

    // Build a 50-record batch payload.
    let batch: Vec<serde_json::Value> = (0..50).map(|_| record.clone()).collect();
    group.bench_function("from_json_batch_50", |b| {
        b.iter(|| {
            black_box(&batch)
                .iter()
                .map(MediaFile::from_json)
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_media_file);
criterion_main!(benches);
