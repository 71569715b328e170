//! Cache Entry Type
//!
//! One resident key/value pair. The entry owns its bytes: creating an entry
//! copies the key and value into boxed slices, and dropping it (on delete or
//! eviction) releases that storage immediately.
//!
//! Keys and values are unconstrained byte strings; an entry's size is the sum
//! of both lengths, which is exactly what it contributes to the cache budget.

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

/// One resident key/value pair.
///
/// An entry exists only while resident in the cache. Its position in the
/// recency ring is tracked by the arena slot that holds it, not by the entry
/// itself.
///
/// # Examples
///
/// ```
/// use bytecache::CacheEntry;
///
/// let entry = CacheEntry::new(b"user:1", b"alice");
/// assert_eq!(entry.key(), b"user:1");
/// assert_eq!(entry.value(), b"alice");
/// assert_eq!(entry.size(), 11);
/// ```
pub struct CacheEntry {
    key: Box<[u8]>,
    value: Box<[u8]>,
}

impl CacheEntry {
    /// Creates an entry owning copies of `key` and `value`.
    #[inline]
    pub fn new(key: &[u8], value: &[u8]) -> Self {
        Self {
            key: Box::from(key),
            value: Box::from(value),
        }
    }

    /// The entry's key bytes.
    #[inline]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The entry's value bytes.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Bytes this entry counts against the cache budget:
    /// `key.len() + value.len()`.
    #[inline]
    pub fn size(&self) -> u64 {
        self.key.len() as u64 + self.value.len() as u64
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value_len", &self.value.len())
            .finish()
    }
}
