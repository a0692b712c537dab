/// Shared infrastructure concerns
pub mod config;

pub use config::AppConfig;
