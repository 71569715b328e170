//! Smoke test of the public surface from a `no_std` + `alloc` consumer.

#![no_std]
extern crate alloc;

use alloc::vec::Vec;
use bytecache::config::LruCacheConfig;
use bytecache::LruCache;

fn make_cache(max_size: u64) -> LruCache {
    LruCache::init(LruCacheConfig { max_size }, None)
}

#[test]
fn test_basic_operations_without_std() {
    let mut cache = make_cache(32);

    assert!(cache.put(b"alpha", b"one"));
    assert!(cache.put(b"beta", b"two"));
    assert!(cache.put_if_absent(b"gamma", b"three"));
    assert!(cache.set(b"alpha", b"uno"));

    let mut buf = Vec::new();
    assert!(cache.get(b"alpha", &mut buf));
    assert_eq!(buf, b"uno");

    assert!(cache.delete(b"beta"));
    assert!(!cache.contains(b"beta"));
    assert!(cache.cur_size() <= cache.max_size());
}

#[test]
fn test_eviction_without_std() {
    let mut cache = make_cache(8);
    assert!(cache.put(b"a", b"111"));
    assert!(cache.put(b"b", b"222"));
    assert!(cache.put(b"c", b"333"));

    assert!(!cache.contains(b"a"));
    assert!(cache.contains(b"b"));
    assert!(cache.contains(b"c"));
    assert_eq!(cache.cur_size(), 8);
}
