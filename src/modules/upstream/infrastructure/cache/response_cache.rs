use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::modules::upstream::domain::repositories::{CacheStats, ResponseCacheStore};

/// Cached entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Value,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(data: Value, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// Process-wide upstream response cache with TTL support and background cleanup
#[derive(Debug)]
pub struct ResponseCache {
    cache: Arc<DashMap<String, CacheEntry>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    cleanups: Arc<AtomicU64>,
    evictions: Arc<AtomicU64>,
    cleanup_task_started: Arc<AtomicBool>,
    cleanup_interval: Duration,
    max_entries: usize,
}

impl ResponseCache {
    pub fn new(max_entries: usize) -> Self {
        let response_cache = Self {
            cache: Arc::new(DashMap::new()),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
            cleanups: Arc::new(AtomicU64::new(0)),
            evictions: Arc::new(AtomicU64::new(0)),
            cleanup_task_started: Arc::new(AtomicBool::new(false)),
            cleanup_interval: Duration::from_secs(300),
            max_entries: max_entries.max(1),
        };

        // Start the sweeper now if a runtime exists, otherwise on first use
        if tokio::runtime::Handle::try_current().is_ok() {
            response_cache.ensure_cleanup_task_started();
        }

        response_cache
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Ensure cleanup task is started (idempotent)
    fn ensure_cleanup_task_started(&self) {
        if self
            .cleanup_task_started
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return;
        }
        if tokio::runtime::Handle::try_current().is_err() {
            self.cleanup_task_started.store(false, Ordering::Release);
            return;
        }

        self.start_cleanup_task();
        debug!("Response cache cleanup task started");
    }

    /// Start background task for cleaning up expired entries.
    /// Holds only a weak reference so dropping the cache ends the task.
    fn start_cleanup_task(&self) {
        let cache = Arc::downgrade(&self.cache);
        let cleanups = self.cleanups.clone();
        let period = self.cleanup_interval;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await;

            loop {
                interval.tick().await;
                let Some(cache) = cache.upgrade() else { break };

                let before = cache.len();
                cache.retain(|_, entry| !entry.is_expired());
                let expired_count = before.saturating_sub(cache.len());

                if expired_count > 0 {
                    cleanups.fetch_add(expired_count as u64, Ordering::Relaxed);
                    debug!("Cleaned up {} expired cache entries", expired_count);
                }
            }
        });
    }

    /// Evict oldest entries when the cache is full, down to 90% of capacity
    fn evict_oldest_entries(&self) {
        let current_size = self.cache.len();
        if current_size < self.max_entries {
            return;
        }

        let mut entries: Vec<(String, Instant)> = self
            .cache
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().created_at))
            .collect();
        entries.sort_by_key(|(_, created_at)| *created_at);

        let target_size = (self.max_entries * 9) / 10;
        let to_evict = current_size.saturating_sub(target_size).max(1);

        for (key, _) in entries.into_iter().take(to_evict) {
            self.cache.remove(&key);
        }
        self.evictions.fetch_add(to_evict as u64, Ordering::Relaxed);

        debug!(
            "Evicted {} old cache entries (was {}, now {})",
            to_evict,
            current_size,
            self.cache.len()
        );
    }
}

#[async_trait]
impl ResponseCacheStore for ResponseCache {
    async fn get(&self, key: &str) -> Option<Value> {
        self.ensure_cleanup_task_started();

        if let Some(entry) = self.cache.get(key) {
            if !entry.is_expired() {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {}", key);
                return Some(entry.data.clone());
            }
        }
        // Expired entries are removed outside the read guard
        self.cache.remove_if(key, |_, entry| entry.is_expired());

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for key: {}", key);
        None
    }

    async fn put(&self, key: &str, value: Value, ttl: Duration) {
        if ttl.is_zero() {
            return;
        }
        self.ensure_cleanup_task_started();

        if !self.cache.contains_key(key) {
            self.evict_oldest_entries();
        }
        self.cache
            .insert(key.to_string(), CacheEntry::new(value, ttl));
        debug!("Cached response for key: {} with TTL: {:?}", key, ttl);
    }

    async fn invalidate_prefix(&self, prefix: &str) -> usize {
        let before = self.cache.len();
        self.cache.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.cache.len());
        if removed > 0 {
            debug!("Invalidated {} cache entries under {}", removed, prefix);
        }
        removed
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.cache.len(),
            expired_cleanups: self.cleanups.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(5000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn stores_and_returns_entries() {
        let cache = ResponseCache::new(10);
        cache
            .put("GET /movie/1", json!({"id": 1}), Duration::from_secs(60))
            .await;

        assert_eq!(cache.get("GET /movie/1").await, Some(json!({"id": 1})));
        assert_eq!(cache.get("GET /movie/2").await, None);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries_count, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[tokio::test]
    async fn zero_ttl_is_not_stored() {
        let cache = ResponseCache::new(10);
        cache.put("GET /account", json!({}), Duration::ZERO).await;
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn expired_entries_are_misses() {
        let cache = ResponseCache::new(10);
        cache
            .put("GET /movie/1", json!({"id": 1}), Duration::from_millis(10))
            .await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert_eq!(cache.get("GET /movie/1").await, None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn evicts_oldest_when_full() {
        let cache = ResponseCache::new(10);
        for i in 0..10 {
            cache
                .put(&format!("key-{}", i), json!(i), Duration::from_secs(60))
                .await;
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        cache.put("key-new", json!("new"), Duration::from_secs(60)).await;

        assert!(cache.len() <= 10);
        assert!(cache.get("key-0").await.is_none());
        assert_eq!(cache.get("key-new").await, Some(json!("new")));
        assert!(cache.stats().evictions >= 1);
    }

    #[tokio::test]
    async fn invalidates_by_prefix() {
        let cache = ResponseCache::new(10);
        let ttl = Duration::from_secs(60);
        cache.put("GET /list/1?page=1", json!(1), ttl).await;
        cache.put("GET /list/1?page=2", json!(2), ttl).await;
        cache.put("GET /list/2?page=1", json!(3), ttl).await;

        assert_eq!(cache.invalidate_prefix("GET /list/1?").await, 2);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn tolerates_concurrent_access() {
        let cache = Arc::new(ResponseCache::new(1000));
        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let cache = cache.clone();
                tokio::spawn(async move {
                    let key = format!("GET /movie/{}", i % 4);
                    if cache.get(&key).await.is_none() {
                        cache.put(&key, json!({"id": i % 4}), Duration::from_secs(60)).await;
                    }
                })
            })
            .collect();

        for task in futures::future::join_all(tasks).await {
            task.unwrap();
        }
        assert_eq!(cache.len(), 4);
    }
}
