//! Byte-Budgeted Least Recently Used (LRU) Cache
//!
//! This module provides the cache controller: the public operations that keep
//! the key index and the recency ring synchronized under every mutation and
//! enforce the byte budget.
//!
//! # Algorithm
//!
//! The cache tracks the total size of resident entries, where an entry's size
//! is `key.len() + value.len()`. When an insertion needs more room than the
//! budget has left, entries are removed from the LRU end of the recency ring,
//! one at a time, until the new entry fits. Reads relocate the entry they hit
//! to the MRU end, so the LRU end always holds the entry untouched for the
//! longest time.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1) average
//!   - Put: O(1) amortized (an individual put may evict several entries,
//!     but each eviction is paid for by an earlier insertion)
//!   - Delete: O(1) average
//!
//! - **Space Complexity**:
//!   - Bounded by `max_size` bytes of keys and values, plus per-entry
//!     bookkeeping (an arena slot and an index entry, including a second
//!     copy of the key)
//!
//! # Failure Model
//!
//! Every operation returns a `bool`; there are no panics in normal operation
//! and no partial effects. A rejected `put` leaves the cache byte-for-byte
//! unchanged: the capacity check runs before any entry is removed.
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. The index and the recency ring
//! are mutated as a non-atomic pair, so concurrent access requires external
//! mutual exclusion such as a `Mutex`, or sharding, in the layer that owns
//! concurrency.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::list::List;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::BuildHasher;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Bytes an entry with these key and value slices counts against the budget.
#[inline]
fn entry_size(key: &[u8], value: &[u8]) -> u64 {
    key.len() as u64 + value.len() as u64
}

/// A byte-budgeted key/value cache with strict LRU eviction.
///
/// The cache couples two structures that stay in bijection: an index mapping
/// each resident key to an arena slot handle, and a recency ring ordering the
/// same entries from least to most recently used. Every public operation
/// resolves the key through the index, adjusts the ring, and maintains the
/// running total of resident bytes.
///
/// # Examples
///
/// ```
/// use bytecache::config::LruCacheConfig;
/// use bytecache::LruCache;
///
/// let mut cache = LruCache::init(LruCacheConfig { max_size: 10 }, None);
///
/// assert!(cache.put(b"ab", b"cd"));
/// assert!(cache.put(b"ef", b"gh"));
///
/// // Needs 4 more bytes than the budget has left, so the least recently
/// // used entry ("ab") is evicted.
/// assert!(cache.put(b"ij", b"kl"));
///
/// let mut value = Vec::new();
/// assert!(!cache.get(b"ab", &mut value));
/// assert!(cache.get(b"ef", &mut value));
/// assert_eq!(value, b"gh");
/// ```
pub struct LruCache<S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<CacheEntry>,
    map: HashMap<Box<[u8]>, usize, S>,
    cur_size: u64,
}

impl LruCache {
    /// Creates a cache from `config` with the default hash builder.
    ///
    /// Pass `Some(hash_builder)` to seed the index explicitly, or `None` for
    /// the default.
    pub fn init(config: LruCacheConfig, hash_builder: Option<DefaultHashBuilder>) -> Self {
        Self::with_hasher(config, hash_builder.unwrap_or_default())
    }
}

impl<S: BuildHasher> LruCache<S> {
    /// Creates a cache from `config` with the supplied hash builder.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        LruCache {
            config,
            list: List::new(),
            map: HashMap::with_hasher(hash_builder),
            cur_size: 0,
        }
    }

    /// Returns the number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no entries are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns true if `key` is resident. Does not refresh recency.
    #[inline]
    pub fn contains(&self, key: &[u8]) -> bool {
        self.map.contains_key(key)
    }

    /// Total bytes of resident entries, counting keys and values.
    #[inline]
    pub fn cur_size(&self) -> u64 {
        self.cur_size
    }

    /// The byte budget this cache was configured with.
    #[inline]
    pub fn max_size(&self) -> u64 {
        self.config.max_size
    }

    /// Inserts or overwrites the entry for `key`.
    ///
    /// If `key` is already resident its old entry is fully removed first, so
    /// the old bytes never count toward the budget while the new entry is
    /// sized. If the cache lacks room, entries are evicted from the LRU end
    /// until the new entry fits; the new entry then lands at the MRU end.
    ///
    /// Returns false, leaving the cache unchanged, when
    /// `key.len() + value.len()` exceeds the budget on its own. An entry of
    /// exactly `max_size` bytes is accepted.
    pub fn put(&mut self, key: &[u8], value: &[u8]) -> bool {
        let need_space = entry_size(key, value);
        if need_space > self.config.max_size {
            return false;
        }

        if self.map.contains_key(key) {
            self.delete(key);
        }

        let free_space = self.config.max_size - self.cur_size;
        if need_space > free_space {
            self.free_memory(need_space - free_space);
        }

        let handle = self.list.insert(CacheEntry::new(key, value));
        self.map.insert(Box::from(key), handle);
        self.cur_size += need_space;
        true
    }

    /// Inserts the entry only if `key` is not resident.
    ///
    /// Returns false without touching the cache when the key is already
    /// resident, or when the entry alone exceeds the budget.
    pub fn put_if_absent(&mut self, key: &[u8], value: &[u8]) -> bool {
        if self.map.contains_key(key) {
            return false;
        }
        self.put(key, value)
    }

    /// Overwrites the entry only if `key` is resident.
    ///
    /// The update is a full delete-and-reinsert, so it also refreshes the
    /// entry's recency. Returns false without touching the cache when the key
    /// is absent, or when the new entry alone exceeds the budget.
    pub fn set(&mut self, key: &[u8], value: &[u8]) -> bool {
        if !self.map.contains_key(key) {
            return false;
        }
        self.put(key, value)
    }

    /// Removes the entry for `key` if resident.
    ///
    /// Returns false when the key is absent. Removal detaches the entry from
    /// both the index and the recency ring and releases its storage.
    pub fn delete(&mut self, key: &[u8]) -> bool {
        if let Some(handle) = self.map.remove(key) {
            let entry = self.list.remove(handle);
            self.cur_size -= entry.size();
            true
        } else {
            false
        }
    }

    /// Copies the value for `key` into `value` and marks the entry as most
    /// recently used.
    ///
    /// On a hit the buffer is overwritten with the stored bytes and the entry
    /// is relocated to the MRU end of the ring; its bytes and budget
    /// contribution are unchanged. On a miss the buffer is left untouched.
    pub fn get(&mut self, key: &[u8], value: &mut Vec<u8>) -> bool {
        if let Some(&handle) = self.map.get(key) {
            let entry = self.list.get(handle);
            value.clear();
            value.extend_from_slice(entry.value());
            self.list.touch(handle);
            true
        } else {
            false
        }
    }

    /// Removes every resident entry and resets the byte total to zero.
    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
        self.cur_size = 0;
    }

    /// Evicts entries from the LRU end until at least `need_size` bytes have
    /// been freed.
    ///
    /// `put`'s capacity check guarantees the resident bytes cover the
    /// request, so the ring cannot run dry mid-loop; the emptiness check only
    /// bounds the loop if that precondition were ever violated.
    fn free_memory(&mut self, mut need_size: u64) {
        while need_size > 0 {
            let victim = match self.list.lru() {
                Some(handle) => handle,
                None => break,
            };
            let entry = self.list.remove(victim);
            self.map.remove(entry.key());
            self.cur_size -= entry.size();
            need_size = need_size.saturating_sub(entry.size());
        }
    }
}

impl<S> fmt::Debug for LruCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("max_size", &self.config.max_size)
            .field("cur_size", &self.cur_size)
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
impl<S: BuildHasher> LruCache<S> {
    /// Walks the ring and cross-checks it against the index and size total.
    fn check_invariants(&self) {
        let mut total = 0u64;
        let mut visited = 0usize;
        for (handle, entry) in self.list.iter() {
            assert_eq!(
                self.map.get(entry.key()).copied(),
                Some(handle),
                "ring entry must be indexed under its own key"
            );
            total += entry.size();
            visited += 1;
        }
        assert_eq!(visited, self.map.len(), "index and ring must be in bijection");
        assert_eq!(visited, self.list.len());
        assert_eq!(total, self.cur_size, "cur_size must equal the sum of entry sizes");
        assert!(self.cur_size <= self.config.max_size, "budget exceeded");
    }

    /// Resident keys in eviction order, LRU end first.
    fn keys_lru_to_mru(&self) -> Vec<Vec<u8>> {
        self.list.iter().map(|(_, e)| e.key().to_vec()).collect()
    }
}
