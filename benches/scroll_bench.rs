use criterion::{criterion_group, criterion_main, Criterion};
use scrollpane::{Key, KeyBindings, ScrollView};
use std::hint::black_box;

fn scroll_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_navigation");

    let items: Vec<String> = (0..10_000).map(|i| format!("item {i}")).collect();

    group.bench_function("scroll_down_walk", |b| {
        b.iter(|| {
            let mut view = ScrollView::new(&items, 10).unwrap();
            for _ in 0..1_000 {
                view = black_box(view.scroll_down());
            }
            view
        })
    });

    group.bench_function("page_down_walk", |b| {
        b.iter(|| {
            let mut view = ScrollView::new(&items, 10).unwrap();
            for _ in 0..1_000 {
                view = black_box(view.page_down());
            }
            view
        })
    });

    group.bench_function("progress_sweep", |b| {
        let view = ScrollView::with_start(&items, 4_321, 10).unwrap();
        b.iter(|| black_box(view.progress()))
    });

    group.finish();
}

fn key_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_resolution");

    let bindings = KeyBindings::default();

    group.bench_function("resolve_bound_literal", |b| {
        b.iter(|| black_box(bindings.resolve(Key::Char('j'))))
    });

    group.bench_function("resolve_bound_named", |b| {
        b.iter(|| black_box(bindings.resolve(Key::PageDown)))
    });

    group.bench_function("resolve_unbound", |b| {
        b.iter(|| black_box(bindings.resolve(Key::Char('x'))))
    });

    group.bench_function("resolve_and_apply", |b| {
        let items = ["a", "b", "c", "d", "e"];
        let view = ScrollView::new(&items, 2).unwrap();
        b.iter(|| {
            let next = bindings
                .resolve(Key::Char('j'))
                .map_or(view, |intent| view.apply(intent));
            black_box(next)
        })
    });

    group.finish();
}

criterion_group!(benches, scroll_navigation, key_resolution);
criterion_main!(benches);
