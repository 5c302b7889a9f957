use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hamt_map::HamtMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;

// Benchmarking module for HamtMap.
// These benchmarks are not exhaustive, and they focus on KPIs like insert
// and get against std::collections::HashMap as the baseline.
// To run benchmarks, use the following command:
// cargo bench --bench benchmarks

fn shuffled_keys(n: i64) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    keys.shuffle(&mut rng);
    keys
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("HamtMap, N=1e4, insert", |b| {
        b.iter(|| {
            let mut map = HamtMap::new();
            for i in 0..10_000i64 {
                let _ = black_box(map.insert(i, i));
            }
            map
        })
    });
}

fn bench_insert_hashmap(c: &mut Criterion) {
    c.bench_function("HashMap, N=1e4, insert", |b| {
        b.iter(|| {
            let mut map = HashMap::new();
            for i in 0..10_000i64 {
                black_box(map.insert(i, i));
            }
            map
        })
    });
}

fn bench_insert_presized(c: &mut Criterion) {
    c.bench_function("HamtMap, N=1e4, insert presized", |b| {
        b.iter(|| {
            let mut map = HamtMap::with_expected_size(10_000);
            for i in 0..10_000i64 {
                let _ = black_box(map.insert(i, i));
            }
            map
        })
    });
}

fn bench_insert_shuffled(c: &mut Criterion) {
    let keys = shuffled_keys(10_000);
    c.bench_function("HamtMap, N=1e4, insert shuffled", |b| {
        b.iter(|| {
            let mut map = HamtMap::new();
            for &key in &keys {
                let _ = black_box(map.insert(key, key));
            }
            map
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let mut map = HamtMap::new();
    for i in 0..10_000i64 {
        map.insert(i, i).unwrap();
    }
    c.bench_function("HamtMap, N=1e4, get", |b| {
        b.iter(|| {
            black_box(map.get(&5000));
        })
    });
}

fn bench_get_hashmap(c: &mut Criterion) {
    let mut map = HashMap::new();
    for i in 0..10_000i64 {
        map.insert(i, i);
    }
    c.bench_function("HashMap, N=1e4, get", |b| {
        b.iter(|| {
            black_box(map.get(&5000));
        })
    });
}

fn bench_iter(c: &mut Criterion) {
    let mut map = HamtMap::new();
    for i in 0..10_000i64 {
        map.insert(i, i).unwrap();
    }
    c.bench_function("HamtMap, N=1e4, iter sum", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for (_, value) in &map {
                sum += *value;
            }
            black_box(sum)
        })
    });
}

fn bench_clone(c: &mut Criterion) {
    let mut map = HamtMap::new();
    for i in 0..10_000i64 {
        map.insert(i, i).unwrap();
    }
    c.bench_function("HamtMap, N=1e4, clone", |b| {
        b.iter(|| black_box(map.clone()))
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_insert_hashmap,
    bench_insert_presized,
    bench_insert_shuffled,
    bench_get,
    bench_get_hashmap,
    bench_iter,
    bench_clone
);
criterion_main!(benches);
