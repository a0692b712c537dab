pub mod retry_policy;
pub mod tmdb_client;

pub use retry_policy::{RateLimitInfo, RetryPolicy};
pub use tmdb_client::{ApiAuth, ClientSettings, TmdbClient};
