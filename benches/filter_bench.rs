//! Benchmarks for the discover filter engine
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use watchtracker::catalog::types::{ContentItem, ContentType};
use watchtracker::discover::{self, FilterCriteria};

const PLATFORMS: &[&str] = &[
    "Netflix",
    "HBO Max",
    "Prime Video",
    "Hulu",
    "Disney+",
    "Apple TV+",
];

const GENRES: &[&str] = &[
    "Action", "Comedy", "Drama", "Sci-Fi", "Thriller", "Horror", "Romance", "Documentary",
];

fn create_test_catalog(count: usize) -> Vec<ContentItem> {
    (0..count)
        .map(|i| {
            let content_type = match i % 4 {
                0 => ContentType::Movie,
                1 => ContentType::Show,
                2 => ContentType::Documentary,
                _ => ContentType::Anime,
            };
            let mut item = ContentItem::new(
                format!("Title {}", i),
                (i % 50) as f64 / 10.0,
                2000 + (i % 25) as i32,
                content_type,
            )
            .platforms(&[PLATFORMS[i % PLATFORMS.len()], PLATFORMS[(i + 2) % PLATFORMS.len()]])
            .genres(&[GENRES[i % GENRES.len()], GENRES[(i + 3) % GENRES.len()]])
            .runtime(30 + (i % 150) as u32);
            item.id = i as u64 + 1;
            item
        })
        .collect()
}

fn bench_identity_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_identity");

    for size in [100, 1000, 10000] {
        let items = create_test_catalog(size);
        let criteria = FilterCriteria::default();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("identity_{}", size), |b| {
            b.iter(|| discover::apply(black_box(&items), black_box(&criteria)))
        });
    }

    group.finish();
}

fn bench_full_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_full");

    for size in [100, 1000, 10000] {
        let items = create_test_catalog(size);
        let criteria = FilterCriteria::default()
            .search("title 1")
            .content_type(ContentType::Show)
            .min_rating(3.0)
            .years(2010, 2024)
            .genre("Drama")
            .on_any_of(&["Netflix", "Hulu"])
            .runtime(30, 120);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("all_predicates_{}", size), |b| {
            b.iter(|| discover::apply(black_box(&items), black_box(&criteria)))
        });
    }

    group.finish();
}

fn bench_search_only(c: &mut Criterion) {
    let items = create_test_catalog(10000);
    let criteria = FilterCriteria::default().search("prime");

    c.bench_function("filter_search_10000", |b| {
        b.iter(|| discover::apply(black_box(&items), black_box(&criteria)))
    });
}

criterion_group!(
    benches,
    bench_identity_filter,
    bench_full_filter,
    bench_search_only
);
criterion_main!(benches);
