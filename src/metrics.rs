//! Store Metrics System
//!
//! Provides a metrics system for the LRU store using BTreeMap-based metrics
//! reporting behind a common [`CacheMetrics`] trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and benchmarking comparisons
//! - **Better debugging**: Consistent output makes logs more readable
//!
//! The performance difference (O(log n) vs O(1)) is negligible with ~10 metric
//! keys, but the deterministic behavior is invaluable for comparisons.
//!
//! The store's capacity model counts entries rather than bytes, so all
//! counters here are event counts.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters tracked by the LRU store.
///
/// A request is any `get`/`get_mut` call; it lands as either a hit or a miss.
/// Insertions, updates, and evictions count the three outcomes a `put` can
/// produce (an eviction always accompanies an insertion).
#[derive(Debug, Default, Clone)]
pub struct LruStoreMetrics {
    /// Total number of requests (gets) made to the store
    pub requests: u64,

    /// Number of requests that resulted in hits
    pub hits: u64,

    /// Number of brand-new keys inserted into the store
    pub insertions: u64,

    /// Number of puts that overwrote an existing key in place
    pub updates: u64,

    /// Number of entries evicted due to capacity pressure
    pub evictions: u64,
}

impl LruStoreMetrics {
    /// Creates a new metrics block with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit - the requested key was found and promoted.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
    }

    /// Records a miss - the requested key was not in the store.
    ///
    /// Misses can also be derived as (requests - hits).
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an insertion of a brand-new key.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an in-place overwrite of an existing key.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an eviction of the least recently used entry.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Calculates the hit rate.
    ///
    /// Returns a value between 0.0 and 1.0, or 0.0 if no requests have been
    /// made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Calculates the miss rate.
    ///
    /// Returns a value between 0.0 and 1.0, or 0.0 if no requests have been
    /// made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    ///
    /// Uses BTreeMap to ensure deterministic, consistent ordering of metrics,
    /// which is critical for reproducible testing and comparison results.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Raw counters
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.hits as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);

        // Derived counters and rates
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.hits) as f64,
        );
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Trait implemented by caches that report metrics.
///
/// Provides a uniform interface for retrieving metrics from a cache
/// implementation, using BTreeMap to ensure deterministic ordering, which is
/// essential for reproducible benchmarks and consistent test results.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    ///
    /// Keys are sorted alphabetically for consistent output.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU").
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LruStoreMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LruStoreMetrics::new();
        assert_eq!(metrics.requests, 0);
        assert_eq!(metrics.hits, 0);
        assert_eq!(metrics.insertions, 0);
        assert_eq!(metrics.updates, 0);
        assert_eq!(metrics.evictions, 0);
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.miss_rate(), 0.0);
    }

    #[test]
    fn test_hit_and_miss_accounting() {
        let mut metrics = LruStoreMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        assert_eq!(metrics.requests, 4);
        assert_eq!(metrics.hits, 3);
        assert_eq!(metrics.hit_rate(), 0.75);
        assert_eq!(metrics.miss_rate(), 0.25);
    }

    #[test]
    fn test_btreemap_reporting() {
        let mut metrics = LruStoreMetrics::new();
        metrics.record_insertion();
        metrics.record_insertion();
        metrics.record_eviction();
        metrics.record_hit();
        metrics.record_miss();

        let report = metrics.to_btreemap();
        assert_eq!(report.get("insertions"), Some(&2.0));
        assert_eq!(report.get("evictions"), Some(&1.0));
        assert_eq!(report.get("requests"), Some(&2.0));
        assert_eq!(report.get("cache_hits"), Some(&1.0));
        assert_eq!(report.get("cache_misses"), Some(&1.0));
        assert_eq!(report.get("eviction_rate"), Some(&0.5));
        assert_eq!(metrics.algorithm_name(), "LRU");
    }

    #[test]
    fn test_no_eviction_rate_without_requests() {
        let mut metrics = LruStoreMetrics::new();
        metrics.record_insertion();
        let report = metrics.to_btreemap();
        assert!(!report.contains_key("eviction_rate"));
    }
}
