use log::{debug, info};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("cinegraph", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn) // Reduce HTTP noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env() // RUST_LOG still wins
            .format_timestamp_secs()
            .format_target(false)
            .init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for upstream traffic
pub struct LogContext;

impl LogContext {
    pub fn api_call(provider: &str, method: &str, path: &str, status: u16, duration_ms: u64) {
        info!(
            "API: {} {} {} -> {} in {}ms",
            provider, method, path, status, duration_ms
        );
    }

    pub fn cache_hit(provider: &str, path: &str) {
        debug!("API: {} GET {} served from cache", provider, path);
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
