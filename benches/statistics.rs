use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rent_explorer::dataset::DataSet;
use rent_explorer::processing::StatKind;
use rent_explorer::types::{Category, Listing};

const LOCATIONS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];
const PROPERTY_TYPES: [&str; 3] = ["Entire home/apt", "Private room", "Shared room"];

fn synthetic(n: usize) -> Vec<Listing> {
    (0..n)
        .map(|i| {
            Listing::new(
                LOCATIONS[i % LOCATIONS.len()],
                PROPERTY_TYPES[(i / 7) % PROPERTY_TYPES.len()],
                (i * 37 % 500) as u32,
            )
        })
        .collect()
}

fn bench_statistics(c: &mut Criterion) {
    let mut ds = DataSet::default();
    ds.load(synthetic(50_000));
    ds.toggle_label(Category::Location, "Manhattan")
        .expect("label exists in synthetic data");

    c.bench_function("cross_table_avg_50k", |b| {
        b.iter(|| black_box(ds.cross_table(StatKind::Avg)))
    });
    c.bench_function("field_table_property_type_50k", |b| {
        b.iter(|| black_box(ds.field_table(Category::PropertyType)))
    });
    c.bench_function("load_50k", |b| {
        b.iter_batched(
            || synthetic(50_000),
            |rows| {
                let mut fresh = DataSet::default();
                black_box(fresh.load(rows))
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_statistics);
criterion_main!(benches);
