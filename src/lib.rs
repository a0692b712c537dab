pub mod modules;
pub mod shared;

pub use modules::graph::{build_schema, AppSchema, DataSources, Upstream};
pub use shared::errors::{AppError, AppResult};
pub use shared::infrastructure::AppConfig;

use shared::utils::logger::init_logger;

/// Start the GraphQL server. `port` overrides the configured port.
pub async fn run(port: Option<u16>) -> AppResult<()> {
    init_logger();

    let mut config = AppConfig::from_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    if config.development {
        log::info!("Running in development mode; GraphQL errors are logged in full");
    }
    if !config.cache_enabled {
        log::warn!("Response cache is disabled; every read goes upstream");
    }

    modules::graph::serve(config).await
}
