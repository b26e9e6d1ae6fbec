//! Benchmarks for specification evaluation and filtering
//!
//! Run with: cargo bench --package specs
//!
//! This will benchmark atomic, composed, and deeply nested specifications
//! over a generated catalog.

use catalog::{Color, Product, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use specs::atoms::{ColorSpecification, SizeSpecification};
use specs::{filter, NotSpecification, Specification};

fn generate_catalog(count: usize) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(42);
    let colors = [Color::Red, Color::Green, Color::Blue];
    let sizes = [Size::Small, Size::Medium, Size::Large];

    (0..count)
        .map(|i| {
            let color = colors[rng.random_range(0..colors.len())];
            let size = sizes[rng.random_range(0..sizes.len())];
            Product::new(format!("product-{i}"), color, size)
        })
        .collect()
}

fn bench_atomic_filter(c: &mut Criterion) {
    let products = generate_catalog(10_000);
    let green = ColorSpecification::new(Color::Green);

    c.bench_function("filter_10k_by_color", |b| {
        b.iter(|| {
            let matched: Vec<&Product> = filter(black_box(&products), &green).collect();
            black_box(matched)
        })
    });
}

fn bench_conjunction_filter(c: &mut Criterion) {
    let products = generate_catalog(10_000);
    let blue_and_large =
        ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));

    c.bench_function("filter_10k_by_conjunction", |b| {
        b.iter(|| {
            let matched: Vec<&Product> = filter(black_box(&products), &blue_and_large).collect();
            black_box(matched)
        })
    });
}

fn bench_nested_tree_filter(c: &mut Criterion) {
    let products = generate_catalog(10_000);
    // (green OR blue) AND NOT small
    let spec = ColorSpecification::new(Color::Green)
        .or(ColorSpecification::new(Color::Blue))
        .and(NotSpecification::new(SizeSpecification::new(Size::Small)));

    c.bench_function("filter_10k_by_nested_tree", |b| {
        b.iter(|| {
            let matched: Vec<&Product> = filter(black_box(&products), &spec).collect();
            black_box(matched)
        })
    });
}

criterion_group!(
    benches,
    bench_atomic_filter,
    bench_conjunction_filter,
    bench_nested_tree_filter
);
criterion_main!(benches);
