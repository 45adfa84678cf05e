#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Operations
//!
//! | Operation | Cost | Touches recency? | Notes |
//! |-----------|------|------------------|-------|
//! | [`LruStore::put`] | O(1) | Yes | Returns `true` only on insert-causing-eviction |
//! | [`LruStore::get`] | O(1) | Yes | Miss is `None`, not an error |
//! | [`LruStore::get_mut`] | O(1) | Yes | Write-through borrow of the stored value |
//! | [`LruStore::len`] | O(1) | No | Equals index length and sequence length |
//! | [`LruStore::peek`] | O(1) | No | Inspection only |
//! | [`LruStore::peek_lru`] | O(1) | No | Observes the current eviction candidate |
//! | [`LruStore::contains`] | O(1) | No | Membership test |
//!
//! ## Eviction walkthrough
//!
//! ```rust
//! use lru_store::config::LruStoreConfig;
//! use lru_store::LruStore;
//!
//! let config = LruStoreConfig { capacity: 2 };
//! let mut store: LruStore<&str, i32> = LruStore::init(config, None);
//! store.put("a", 1);
//! store.put("b", 2);
//! store.get(&"a");            // "a" becomes most recently used
//! assert!(store.put("c", 3)); // "b" evicted (least recently used)
//! assert!(store.get(&"b").is_none());
//! ```
//!
//! ## Capacity pressure signal
//!
//! `put` collapses three outcomes into one boolean: *updated-existing* and
//! *inserted-without-eviction* both report `false`; only
//! *inserted-causing-eviction* reports `true`.
//!
//! ```rust
//! use lru_store::LruStore;
//!
//! let mut store = LruStore::new(1);
//! assert!(!store.put(1, 2));  // inserted below capacity
//! assert!(!store.put(1, 9));  // updated in place
//! assert!(store.put(2, 3));   // evicted key 1
//! assert!(store.get(&1).is_none());
//! ```
//!
//! ## Metrics
//!
//! ```rust
//! use lru_store::metrics::CacheMetrics;
//! use lru_store::LruStore;
//!
//! let mut store = LruStore::new(2);
//! store.put("a", 1);
//! store.get(&"a");
//! store.get(&"b");
//!
//! let report = store.metrics();
//! assert_eq!(report.get("cache_hits"), Some(&1.0));
//! assert_eq!(report.get("cache_misses"), Some(&1.0));
//! ```
//!
//! ## Modules
//!
//! - [`store`]: the LRU store implementation
//! - [`config`]: configuration structure for the store
//! - [`metrics`]: metrics collection for store performance monitoring

#![no_std]

/// Doubly linked list implementation with in-place reordering capabilities.
///
/// This module is the recency sequence backing the store: a memory-efficient
/// doubly linked list allowing O(1) insertion, removal, and move-to-front.
///
/// **Note**: This module is internal infrastructure. It exposes unsafe raw
/// pointer operations that require careful invariant maintenance; use the
/// high-level store instead.
pub(crate) mod list;

/// Store configuration structure.
pub mod config;

/// Least Recently Used (LRU) store implementation.
///
/// Provides a fixed-capacity store that evicts the least recently used entry
/// when a new key arrives at full capacity.
pub mod store;

/// Store metrics system.
///
/// Provides a metrics collection and reporting system with deterministic
/// output ordering.
pub mod metrics;

// Re-export the store type
pub use store::LruStore;
