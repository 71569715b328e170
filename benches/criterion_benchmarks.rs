use bytecache::config::LruCacheConfig;
use bytecache::LruCache;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Helper to create a cache with the given byte budget
fn make_cache(max_size: u64) -> LruCache {
    LruCache::init(LruCacheConfig { max_size }, None)
}

fn key(i: usize) -> Vec<u8> {
    format!("key_{i:08}").into_bytes()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const ENTRIES: usize = 1000;
    const VALUE: &[u8] = &[0x5a; 64];
    // Roomy enough to keep all ENTRIES resident.
    const ROOMY: u64 = (ENTRIES * 128) as u64;

    let mut group = c.benchmark_group("Cache Operations");

    {
        let mut cache = make_cache(ROOMY);
        for i in 0..ENTRIES {
            cache.put(&key(i), VALUE);
        }
        let mut buf = Vec::new();

        group.bench_function("get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&key(i % ENTRIES), &mut buf));
                }
            });
        });

        group.bench_function("get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&key(i + ENTRIES), &mut buf));
                }
            });
        });
    }

    {
        let mut cache = make_cache(ROOMY);
        for i in 0..ENTRIES {
            cache.put(&key(i), VALUE);
        }
        group.bench_function("put overwrite", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.put(&key(i % ENTRIES), VALUE));
                }
            });
        });
    }

    {
        // Tight budget: every put beyond the first few evicts.
        let mut cache = make_cache(1024);
        let mut i = 0usize;
        group.bench_function("put with eviction churn", |b| {
            b.iter(|| {
                black_box(cache.put(&key(i), VALUE));
                i += 1;
            });
        });
    }

    {
        let mut cache = make_cache(ROOMY);
        for i in 0..ENTRIES {
            cache.put(&key(i), VALUE);
        }
        let mut buf = Vec::new();
        let mut i = 0usize;
        group.bench_function("mixed get/put", |b| {
            b.iter(|| {
                if i % 4 == 0 {
                    black_box(cache.put(&key(i % ENTRIES), VALUE));
                } else {
                    black_box(cache.get(&key(i % ENTRIES), &mut buf));
                }
                i += 1;
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
