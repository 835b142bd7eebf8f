//! Criterion micro-benchmarks for the open map and heap.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use strata_arena::StackArena;
use strata_bench::{load_factor_count, spread_values, IDENTITY};
use strata_collections::{Heap, OpenMap, Vector};

const SLOTS: usize = 1024;

/// Benchmark: fill a 1024-slot map to several load factors, then look up
/// every value once.
fn bench_map_fill_and_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_map_fill_find");
    for load in [0.5, 0.75, 0.9] {
        let values = spread_values(load_factor_count(SLOTS, load), 42);
        group.bench_with_input(BenchmarkId::from_parameter(load), &values, |b, values| {
            let arena = StackArena::new(64 * 1024);
            b.iter(|| {
                let mut map = OpenMap::allocate(&arena, SLOTS, IDENTITY);
                for &v in values {
                    map.insert(v);
                }
                for v in values {
                    black_box(map.find(v));
                }
                map.free();
            });
        });
    }
    group.finish();
}

/// Benchmark: insert then erase every value of a 75%-full map.
fn bench_map_churn(c: &mut Criterion) {
    let values = spread_values(load_factor_count(SLOTS, 0.75), 7);
    let arena = StackArena::new(64 * 1024);
    c.bench_function("open_map_insert_erase_768", |b| {
        b.iter(|| {
            let mut map = OpenMap::allocate(&arena, SLOTS, IDENTITY);
            for &v in &values {
                map.insert(v);
            }
            for v in &values {
                map.erase(v);
            }
            map.free();
        });
    });
}

/// Benchmark: push 1024 values through the heap and drain it.
fn bench_heap_drain(c: &mut Criterion) {
    let values = spread_values(1024, 3);
    let arena = StackArena::new(64 * 1024);
    c.bench_function("heap_insert_drain_1024", |b| {
        b.iter(|| {
            let mut heap = Heap::allocate(&arena, values.len(), IDENTITY);
            for &v in &values {
                heap.insert(v);
            }
            while let Some(v) = heap.try_pop() {
                black_box(v);
            }
            heap.free();
        });
    });
}

/// Benchmark: swap-with-last removal from the front of a full vector.
fn bench_vector_remove_front(c: &mut Criterion) {
    let values = spread_values(1024, 11);
    let arena = StackArena::new(64 * 1024);
    c.bench_function("vector_remove_at_front_1024", |b| {
        b.iter(|| {
            let mut vec = Vector::allocate_from(&arena, &values);
            for _ in 0..values.len() {
                black_box(vec.remove_at(0));
            }
            vec.free();
        });
    });
}

criterion_group!(
    benches,
    bench_map_fill_and_find,
    bench_map_churn,
    bench_heap_drain,
    bench_vector_remove_front
);
criterion_main!(benches);
