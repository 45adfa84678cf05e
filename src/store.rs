//! Least Recently Used (LRU) Store Implementation
//!
//! This module provides the fixed-capacity key-value store at the heart of the
//! crate, with O(1) operations for all lookups, insertions, and updates.
//!
//! # Algorithm
//!
//! The store keeps entries in order of recency of use and evicts the least
//! recently used entry when a new key arrives at full capacity. Two coupled
//! structures make that O(1):
//!
//! - a doubly linked **recency sequence** ordered from most-recently-used
//!   (front) to least-recently-used (back), and
//! - a **lookup index** mapping each key to a stable pointer at its node in
//!   the sequence.
//!
//! Every operation keeps the two structures mutually consistent: the index and
//! the sequence always have the same length, and the index always locates the
//! unique sequence entry for each present key.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**: Get O(1), Put O(1)
//! - **Space Complexity**: O(n) where n is the capacity of the store
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! store with a synchronization primitive such as `Mutex` or `RwLock` and hold
//! the lock across each whole call.

extern crate alloc;

use crate::config::LruStoreConfig;
use crate::list::{List, Node};
use crate::metrics::{CacheMetrics, LruStoreMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A fixed-capacity key-value store with least-recently-used eviction.
///
/// The capacity is fixed at creation and the store never holds more entries
/// than it. Reads (`get`, `get_mut`) and writes (`put`) both count as use and
/// promote the touched entry to most recently used; when a brand-new key
/// arrives at full capacity, the least recently used entry is evicted to make
/// room. Eviction is the only removal path - there is no delete operation.
///
/// [`put`](LruStore::put) returns `true` only when it evicted an entry, which
/// is the signal callers use to detect capacity pressure. Updating an existing
/// key and inserting below capacity both return `false`.
///
/// A capacity of zero is valid: such a store never retains anything and every
/// `put` is a total no-op returning `false`.
///
/// # Examples
///
/// ```
/// use lru_store::LruStore;
///
/// let mut store = LruStore::new(2);
///
/// // Add entries to the store
/// assert!(!store.put("apple", 1));
/// assert!(!store.put("banana", 2));
///
/// // Accessing entries updates their recency
/// assert_eq!(store.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used entry
/// assert!(store.put("cherry", 3));
/// assert_eq!(store.get(&"banana"), None);
/// assert_eq!(store.get(&"apple"), Some(&1));
/// assert_eq!(store.get(&"cherry"), Some(&3));
/// ```
pub struct LruStore<K, V, S = DefaultHashBuilder> {
    config: LruStoreConfig,
    list: List<(K, V)>,
    map: HashMap<K, *mut Node<(K, V)>, S>,
    metrics: LruStoreMetrics,
}

// SAFETY: LruStore owns all data and raw pointers point only to nodes owned by `list`.
// Concurrent access is safe when wrapped in proper synchronization primitives.
unsafe impl<K: Send, V: Send, S: Send> Send for LruStore<K, V, S> {}

// SAFETY: All mutation requires &mut self; shared references cannot cause data races.
unsafe impl<K: Send, V: Send, S: Sync> Sync for LruStore<K, V, S> {}

impl<K: Hash + Eq, V> LruStore<K, V> {
    /// Creates a new store with the given capacity and the default hasher.
    pub fn new(capacity: usize) -> LruStore<K, V> {
        LruStore::init(LruStoreConfig { capacity }, None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruStore<K, V, S> {
    /// Creates a new store from a configuration, with an optional hash
    /// builder. Passing `None` uses the hasher's default.
    pub fn init(config: LruStoreConfig, hash_builder: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_hasher(config, hash_builder.unwrap_or_default())
    }

    /// Creates a new store from a configuration and an explicit hash builder.
    pub fn with_hasher(config: LruStoreConfig, hash_builder: S) -> Self {
        LruStore {
            config,
            list: List::new(config.capacity),
            map: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            metrics: LruStoreMetrics::new(),
        }
    }

    /// Returns the fixed capacity of the store.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity
    }

    /// Returns the current number of entries.
    ///
    /// Always equal to both the recency sequence length and the lookup index
    /// length.
    #[inline]
    pub fn len(&self) -> usize {
        self.debug_validate();
        self.map.len()
    }

    /// Returns true if the store holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Looks up a key and, on a hit, promotes its entry to most recently used.
    ///
    /// Returns a borrow of the value, or `None` if the key is absent. A miss
    /// does not mutate the store. Read access counts as use: after a
    /// successful `get(k)`, `k` is the last key to be evicted among current
    /// occupants.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.debug_validate();
        if let Some(node) = self.map.get(key).copied() {
            unsafe {
                // SAFETY: node comes from our map
                self.list.move_to_front(node);
                let (k, v) = (*node).value();
                debug_assert!(k.borrow() == key, "index locator points at wrong entry");
                self.metrics.record_hit();
                Some(v)
            }
        } else {
            self.metrics.record_miss();
            None
        }
    }

    /// Looks up a key and, on a hit, promotes its entry to most recently used
    /// and returns a mutable borrow of the value.
    ///
    /// Mutating through the returned reference changes the stored value
    /// without re-triggering eviction accounting. The borrow ends at the next
    /// call on the store.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.debug_validate();
        if let Some(node) = self.map.get(key).copied() {
            unsafe {
                // SAFETY: node comes from our map
                self.list.move_to_front(node);
                self.metrics.record_hit();
                let (_, v) = (*node).value_mut();
                Some(v)
            }
        } else {
            self.metrics.record_miss();
            None
        }
    }

    /// Looks up a key without touching recency.
    ///
    /// Unlike [`get`](LruStore::get), this neither promotes the entry nor
    /// counts towards request metrics. Intended for inspection - verification
    /// harnesses use it to observe state without perturbing it.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        // SAFETY: node comes from our map
        let (_, v) = unsafe { (*node).value() };
        Some(v)
    }

    /// Returns the current eviction candidate - the least recently used
    /// entry - without touching recency.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|(k, v)| (k, v))
    }

    /// Returns true if the key is present, without touching recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Checks the coupling invariants between the lookup index and the
    /// recency sequence. Compiled out in release builds.
    #[inline]
    fn debug_validate(&self) {
        debug_assert_eq!(self.map.len(), self.list.len());
        debug_assert!(self.list.len() <= self.config.capacity);
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruStore<K, V, S> {
    /// Inserts or updates a key, reporting whether an entry was evicted.
    ///
    /// - If `key` is already present, its value is overwritten in place and
    ///   the entry becomes most recently used. Returns `false`.
    /// - If the store is below capacity, the entry is inserted at the front
    ///   of the recency sequence. Returns `false`.
    /// - If the store is at full (non-zero) capacity and `key` is new, the
    ///   least recently used entry is removed from both the sequence and the
    ///   index, then the new entry is inserted. Returns `true`.
    /// - With a capacity of zero nothing is stored and nothing is evicted.
    ///   Returns `false`.
    ///
    /// Only insert-causing-eviction reports `true`; updating an existing key
    /// never evicts, regardless of capacity state.
    pub fn put(&mut self, key: K, value: V) -> bool {
        self.debug_validate();

        if let Some(&node) = self.map.get(&key) {
            unsafe {
                // SAFETY: node comes from our map
                self.list.move_to_front(node);
                let entry = (*node).value_mut();
                debug_assert!(entry.0 == key, "index locator points at wrong entry");
                entry.1 = value;
            }
            self.metrics.record_update();
            return false;
        }

        // Zero capacity: nothing to evict and nothing to store
        if self.config.capacity == 0 {
            return false;
        }

        let mut evicted = false;
        if self.map.len() >= self.config.capacity {
            if let Some(node) = self.list.remove_last() {
                // Sequence first, then index, so a locator never outlives its node.
                // SAFETY: nodes handed out by the list hold initialized entries
                let (old_key, _old_value) = unsafe { node.into_value() };
                self.map.remove(&old_key);
                self.metrics.record_eviction();
                evicted = true;
            }
        }

        if let Some(node) = self.list.add((key.clone(), value)) {
            self.map.insert(key, node);
            self.metrics.record_insertion();
        }

        self.debug_validate();
        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruStore<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> core::fmt::Debug for LruStore<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruStore")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}
