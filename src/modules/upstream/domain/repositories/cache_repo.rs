use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Storage for upstream GET responses, keyed by request signature.
///
/// Injected into the HTTP client so tests can swap in a deterministic fake.
/// Implementations must tolerate concurrent reads and writes; entries may be
/// dropped at any time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseCacheStore: Send + Sync {
    /// Get a cached response if present and not expired
    async fn get(&self, key: &str) -> Option<Value>;

    /// Store a response for `ttl`
    async fn put(&self, key: &str, value: Value, ttl: Duration);

    /// Drop every entry whose key starts with `prefix`; returns how many were removed
    async fn invalidate_prefix(&self, prefix: &str) -> usize;

    /// Get cache statistics
    fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
    pub expired_cleanups: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Cache that stores nothing; used when caching is disabled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCache;

#[async_trait]
impl ResponseCacheStore for NoopCache {
    async fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    async fn put(&self, _key: &str, _value: Value, _ttl: Duration) {}

    async fn invalidate_prefix(&self, _prefix: &str) -> usize {
        0
    }

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}
