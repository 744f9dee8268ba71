//! # Spotcrates Performance Benchmarks
//!
//! Benchmarks for the listing query engine and the merge computation.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark group
//! cargo bench query
//! cargo bench merge
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use spotcrates::fields::FieldName;
use spotcrates::filters::{apply_filters, parse_filters};
use spotcrates::mix::compute_append_batch;
use spotcrates::model::{PlaylistItem, TrackRef};
use spotcrates::operators::find_filter_type;
use spotcrates::record::PlaylistRecord;
use spotcrates::sorting::{apply_sort, parse_sort_fields};
use std::hint::black_box;

const OWNERS: [&str; 4] = ["cmayes", "spotify", "friend", "jazzcurator"];

fn create_records(count: usize) -> Vec<PlaylistRecord> {
    (0..count)
        .map(|i| {
            PlaylistRecord::new(format!("playlist{i}"))
                .with(FieldName::PlaylistName, format!("Playlist {} Mix", i % 97))
                .with(FieldName::Size, i64::try_from(i * 37 % 500).unwrap_or_default())
                .with(FieldName::Owner, OWNERS[i % OWNERS.len()])
                .with(FieldName::PlaylistDescription, format!("Generated list number {i}"))
        })
        .collect()
}

fn create_tracks(prefix: &str, count: usize) -> Vec<TrackRef> {
    (0..count)
        .filter_map(|i| TrackRef::from_item(PlaylistItem::for_track(format!("{prefix}{}", i % 700))))
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    group.bench_function("abbreviation_lookup", |b| {
        b.iter(|| {
            for token in ["c", "eq", "st", "ends", "gr", "geq", "less", "leq"] {
                black_box(find_filter_type(black_box(token)).ok());
            }
        })
    });

    let filters = parse_filters(Some("n:mix,size:geq:100,owner:eq:cmayes")).unwrap();
    let sort_fields = parse_sort_fields(Some("size:desc,name")).unwrap();

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("filter", size), &size, |b, &size| {
            b.iter_batched(
                || create_records(size),
                |records| black_box(apply_filters(records, &filters)),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("sort", size), &size, |b, &size| {
            b.iter_batched(
                || create_records(size),
                |records| black_box(apply_sort(records, &sort_fields)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    // Pairs of sources overlap; the target and one exclusion list cover part
    // of them, so the batch is neither empty nor the full candidate list.
    let sources: Vec<Vec<TrackRef>> = (0..6)
        .map(|n| create_tracks(&format!("s{}-", n % 3), 50))
        .collect();
    let target = create_tracks("s0-", 25);
    let exclusions = vec![create_tracks("x", 5_000), create_tracks("s1-", 10)];
    assert_eq!(compute_append_batch(&sources, &target, &exclusions).len(), 25 + 40 + 50);

    group.bench_function("compute_append_batch", |b| {
        b.iter(|| {
            black_box(compute_append_batch(
                black_box(&sources),
                black_box(&target),
                black_box(&exclusions),
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_query, bench_merge);
criterion_main!(benches);
