//! Cache Configuration
//!
//! Construction parameters for the cache. The struct has public fields and no
//! builder: create it with all fields set and hand it to
//! [`LruCache::init`](crate::LruCache::init).
//!
//! # Sizing
//!
//! `max_size` is the total byte budget for resident entries, counting both
//! keys and values (`key.len() + value.len()` per entry). It does not account
//! for per-entry bookkeeping (arena slot, index entry), which adds a few
//! dozen bytes per entry on top of the budget.
//!
//! A single entry can never exceed `max_size` on its own; an entry of exactly
//! `max_size` bytes is accepted and occupies the whole cache.
//!
//! # Examples
//!
//! ```
//! use bytecache::config::LruCacheConfig;
//! use bytecache::LruCache;
//!
//! // 64 MiB budget for keys plus values.
//! let config = LruCacheConfig {
//!     max_size: 64 * 1024 * 1024,
//! };
//! let cache = LruCache::init(config, None);
//! assert_eq!(cache.max_size(), 64 * 1024 * 1024);
//! ```

use core::fmt;

/// Configuration for a byte-budgeted LRU cache.
///
/// # Fields
///
/// - `max_size`: Maximum total bytes of resident entries, counting both keys
///   and values. Fixed for the cache's lifetime.
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum total bytes of resident entries (keys plus values).
    pub max_size: u64,
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("max_size", &self.max_size)
            .finish()
    }
}
