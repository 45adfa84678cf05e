//! Demonstration of basic `LruStore` usage.

use lru_store::config::LruStoreConfig;
use lru_store::metrics::CacheMetrics;
use lru_store::LruStore;

fn main() {
    println!("LRU Store Demonstration");
    println!("=======================");

    // The classic single-entry exercise
    let mut store: LruStore<i32, i32> = LruStore::new(10);
    store.put(1, 2);
    println!("cached: 1 --> 2");
    match store.get(&1) {
        Some(value) => println!("key: 1, value: {value}"),
        None => println!("value is absent"),
    }
    match store.get(&2) {
        Some(value) => println!("key: 2, value: {value}"),
        None => println!("key: 2 is absent"),
    }

    // Eviction walkthrough with a store of capacity 3
    println!("\nEviction walkthrough (capacity 3)");
    println!("---------------------------------");
    let config = LruStoreConfig { capacity: 3 };
    let mut store: LruStore<&str, i32> = LruStore::init(config, None);

    for (key, value) in [("apple", 1), ("banana", 2), ("cherry", 3)] {
        let evicted = store.put(key, value);
        println!("put {key:>6} -> {value}   evicted: {evicted}");
    }

    println!("touch 'apple' (promotes it to most recently used)");
    store.get(&"apple");

    if let Some((key, value)) = store.peek_lru() {
        println!("eviction candidate is now: {key} -> {value}");
    }

    let evicted = store.put("date", 4);
    println!("put   date -> 4   evicted: {evicted}");
    println!("contains 'banana': {}", store.contains(&"banana"));
    println!("contains 'apple':  {}", store.contains(&"apple"));

    // Metrics report
    println!("\nMetrics ({})", store.algorithm_name());
    println!("------------");
    for (name, value) in store.metrics() {
        println!("{name:<24} {value:.3}");
    }
}
