pub mod domain;
pub mod infrastructure;

pub use domain::{CacheTtl, ResponseCacheStore};
pub use infrastructure::{ApiAuth, ClientSettings, ResponseCache, TmdbClient};
