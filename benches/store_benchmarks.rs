use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lru_store::config::LruStoreConfig;
use lru_store::LruStore;

// Helper function to create a store with the init pattern
fn make_store<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruStore<K, V> {
    let config = LruStoreConfig { capacity: cap };
    LruStore::init(config, None)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const STORE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Store Operations");

    {
        let mut store = make_store(STORE_SIZE);
        for i in 0..STORE_SIZE {
            store.put(i, i);
        }

        group.bench_function("get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(store.get(&(i % STORE_SIZE)));
                }
            });
        });

        group.bench_function("get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(store.get(&(i + STORE_SIZE)));
                }
            });
        });

        group.bench_function("put existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(store.put(i % STORE_SIZE, i));
                }
            });
        });

        group.bench_function("peek", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(store.peek(&(i % STORE_SIZE)));
                }
            });
        });
    }

    {
        // Every put is a new key at full capacity, so each one evicts
        let mut store = make_store(STORE_SIZE);
        for i in 0..STORE_SIZE {
            store.put(i, i);
        }
        let mut next_key = STORE_SIZE;

        group.bench_function("put new with eviction", |b| {
            b.iter(|| {
                for _ in 0..100 {
                    black_box(store.put(next_key, next_key));
                    next_key += 1;
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
