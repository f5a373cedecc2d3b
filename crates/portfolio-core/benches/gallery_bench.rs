//! Benchmarks for the gallery pipeline
//!
//! Run with: cargo bench -p portfolio-core
//!
//! Covers the work redone on every filter/sort/resize event:
//! - Mapping raw store records
//! - Filter + sort + paginate through `GalleryView`
//! - Category counts
//! - Masonry placement

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use portfolio_core::gallery::{category_counts, CategoryFilter, SortMode, FILTER_ORDER};
use portfolio_core::mapping::{map_projects, RawProject};
use portfolio_core::masonry::{masonry_columns, relative_height};
use portfolio_core::{reorder, Category, GalleryItem, GalleryView, ImageUrlBuilder};

fn raw_records(count: usize) -> Vec<RawProject> {
    (0..count)
        .map(|n| RawProject {
            id: Some(format!("doc-{}", n)),
            created_at: Some(format!("2024-01-01T{:02}:{:02}:00Z", (n / 60) % 24, n % 60)),
            title: Some(format!("Project {}", n)),
            category: Some(FILTER_ORDER[n % FILTER_ORDER.len()].as_str().to_string()),
            published: Some(true),
            order: if n % 3 == 0 { Some(n as f64) } else { None },
            image_ref: Some(format!("image-h{}-{}x{}-jpg", n, 800 + n % 400, 600 + n % 700)),
            ..Default::default()
        })
        .collect()
}

fn items(count: usize) -> Vec<GalleryItem> {
    map_projects(raw_records(count), &ImageUrlBuilder::new("p", "production")).0
}

// ============================================================================
// Mapping Benchmarks
// ============================================================================

fn bench_mapping(c: &mut Criterion) {
    let urls = ImageUrlBuilder::new("p", "production");
    let mut group = c.benchmark_group("map_projects");

    for size in [50, 500] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || raw_records(size),
                |raws| black_box(map_projects(raws, &urls)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let source = items(500);
    let mut group = c.benchmark_group("gallery_view");

    for mode in SortMode::ALL {
        group.bench_function(format!("all_{}", mode), |b| {
            let mut view = GalleryView::new();
            view.set_sort(mode);
            b.iter(|| black_box(view.visible(&source).len()))
        });
    }

    group.bench_function("wedding_expanded", |b| {
        let mut view = GalleryView::new();
        view.set_category(CategoryFilter::Only(Category::Wedding));
        view.toggle_expanded();
        b.iter(|| black_box(view.visible(&source).len()))
    });

    group.bench_function("category_counts", |b| {
        b.iter(|| black_box(category_counts(&source).visible_filters()))
    });

    group.finish();
}

// ============================================================================
// Layout Benchmarks
// ============================================================================

fn bench_masonry(c: &mut Criterion) {
    let source = items(500);
    let refs: Vec<&GalleryItem> = source.iter().collect();
    let mut group = c.benchmark_group("masonry");

    for columns in [2, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(columns), &columns, |b, &columns| {
            b.iter(|| black_box(masonry_columns(&refs, columns, |item| relative_height(item))))
        });
    }

    group.finish();
}

fn bench_reorder(c: &mut Criterion) {
    let source = items(500);
    c.bench_function("reorder_500_first_to_last", |b| {
        b.iter(|| black_box(reorder(&source, 0, source.len() - 1)))
    });
}

criterion_group!(benches, bench_mapping, bench_pipeline, bench_masonry, bench_reorder);
criterion_main!(benches);
