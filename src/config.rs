//! Store Configuration Module
//!
//! This module provides the configuration structure for the LRU store.
//!
//! # Design Philosophy
//!
//! The configuration struct has all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! # Capacity
//!
//! `capacity` is the maximum number of entries the store will ever hold, fixed
//! for the lifetime of the store. A capacity of zero is valid: such a store
//! never retains anything and every `put` is a no-op.
//!
//! # Examples
//!
//! ```
//! use lru_store::config::LruStoreConfig;
//! use lru_store::LruStore;
//!
//! let config = LruStoreConfig { capacity: 1000 };
//! let store: LruStore<i32, i32> = LruStore::init(config, None);
//! assert_eq!(store.cap(), 1000);
//! ```

use core::fmt;

/// Configuration for an [`LruStore`](crate::LruStore).
///
/// The store evicts its least recently used entry when a new key arrives at
/// full capacity.
///
/// # Examples
///
/// ```
/// use lru_store::config::LruStoreConfig;
/// use lru_store::LruStore;
///
/// let config = LruStoreConfig { capacity: 500 };
/// let mut store: LruStore<&str, i32> = LruStore::init(config, None);
/// store.put("answer", 42);
///
/// // A zero-capacity store is valid and never retains anything
/// let config = LruStoreConfig { capacity: 0 };
/// let mut store: LruStore<&str, i32> = LruStore::init(config, None);
/// assert!(!store.put("answer", 42));
/// assert_eq!(store.len(), 0);
/// ```
#[derive(Clone, Copy)]
pub struct LruStoreConfig {
    /// Maximum number of key-value entries the store can hold. May be zero,
    /// in which case every insertion degrades to a no-op.
    pub capacity: usize,
}

impl fmt::Debug for LruStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruStoreConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
