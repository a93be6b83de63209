//! Criterion benchmarks for task store hot paths.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - create (lock + append)
//!   - find by id (linear scan, hit and miss)
//!   - wire serialization of a task envelope (serde_json)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use taskd::store::TaskStore;

fn bench_store_ops(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("store_create", |b| {
        let store = TaskStore::new();
        b.iter(|| {
            rt.block_on(async {
                let t = store
                    .create("bench".to_string(), "bench".to_string(), false)
                    .await;
                black_box(t);
            });
        });
    });

    // 100 records is already far beyond the intended working set; the scan
    // cost at this size bounds anything the service will actually see.
    let store = rt.block_on(async {
        let store = TaskStore::new();
        for i in 0..100 {
            store
                .create(format!("task {i}"), "filler".to_string(), false)
                .await;
        }
        store
    });

    c.bench_function("store_find_hit", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(store.find(black_box(100)).await);
            });
        });
    });

    c.bench_function("store_find_miss", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(store.find(black_box(10_000)).await);
            });
        });
    });
}

fn bench_serialize(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let task = rt.block_on(async {
        TaskStore::seeded().find(1).await.unwrap()
    });

    c.bench_function("serialize_task_envelope", |b| {
        b.iter(|| {
            let s = serde_json::to_string(&json!({"status": "ok", "task": &task })).unwrap();
            black_box(s);
        });
    });
}

criterion_group!(benches, bench_store_ops, bench_serialize);
criterion_main!(benches);
