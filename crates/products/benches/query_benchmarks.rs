use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use catalog_products::{Category, FilterCriteria, ProductStore, SortKey, sample};

/// Sample catalog repeated until it holds `size` products.
fn catalog(size: usize) -> ProductStore {
    let mut store = ProductStore::new();
    let seed = sample::products();
    for product in seed.iter().cycle().take(size) {
        let (_, data) = product.clone().into_parts();
        store.add(data).unwrap();
    }
    store
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");

    for size in [100usize, 1_000, 10_000] {
        let store = catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &store, |b, store| {
            let criteria = FilterCriteria::default();
            b.iter(|| black_box(store.query(&criteria)));
        });

        group.bench_with_input(BenchmarkId::new("text_and_category", size), &store, |b, store| {
            let criteria = FilterCriteria::new()
                .with_text("o")
                .with_category(Category::Electronics);
            b.iter(|| black_box(store.query(&criteria)));
        });

        group.bench_with_input(BenchmarkId::new("sort_by_name", size), &store, |b, store| {
            let criteria = FilterCriteria::new().sorted_by(SortKey::Name);
            b.iter(|| black_box(store.query(&criteria)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
