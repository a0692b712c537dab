pub mod cache_policy;
pub mod repositories;

pub use cache_policy::CacheTtl;
pub use repositories::{CacheStats, NoopCache, ResponseCacheStore};
