pub mod cache;
pub mod http_client;

pub use cache::ResponseCache;
pub use http_client::{ApiAuth, ClientSettings, RetryPolicy, TmdbClient};
