//! Process configuration loaded from the environment (and `.env` in development)

use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_V3_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_V4_BASE_URL: &str = "https://api.themoviedb.org/4";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub tmdb_api_key: String,
    pub tmdb_read_access_token: Option<String>,
    pub v3_base_url: String,
    pub v4_base_url: String,
    pub request_timeout: Duration,
    pub cache_enabled: bool,
    pub cache_max_entries: usize,
    pub jwt_secret: Option<String>,
    pub port: u16,
    pub development: bool,
}

impl AppConfig {
    /// Read configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tmdb_api_key = lookup("TMDB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("TMDB_API_KEY must be set".to_string()))?;

        let parse_or = |key: &str, default: u64| -> AppResult<u64> {
            match lookup(key) {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    AppError::Config(format!("{} must be a number, got '{}'", key, raw))
                }),
                None => Ok(default),
            }
        };

        let port = parse_or("PORT", 4000)?;
        let port = u16::try_from(port)
            .map_err(|_| AppError::Config(format!("PORT out of range: {}", port)))?;

        Ok(Self {
            tmdb_api_key,
            tmdb_read_access_token: lookup("TMDB_READ_ACCESS_TOKEN").filter(|t| !t.is_empty()),
            v3_base_url: lookup("TMDB_V3_BASE_URL")
                .unwrap_or_else(|| DEFAULT_V3_BASE_URL.to_string()),
            v4_base_url: lookup("TMDB_V4_BASE_URL")
                .unwrap_or_else(|| DEFAULT_V4_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(parse_or("TMDB_TIMEOUT_SECS", 10)?),
            cache_enabled: lookup("CACHE_ENABLED")
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
            cache_max_entries: parse_or("CACHE_MAX_ENTRIES", 5000)? as usize,
            jwt_secret: lookup("JWT_SECRET").filter(|s| !s.is_empty()),
            port,
            development: lookup("APP_ENV")
                .map(|env| env.eq_ignore_ascii_case("development"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_api_key_is_set() {
        let config = AppConfig::from_lookup(lookup(&[("TMDB_API_KEY", "abc")])).unwrap();
        assert_eq!(config.tmdb_api_key, "abc");
        assert_eq!(config.v3_base_url, DEFAULT_V3_BASE_URL);
        assert_eq!(config.v4_base_url, DEFAULT_V4_BASE_URL);
        assert_eq!(config.port, 4000);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.cache_enabled);
        assert!(!config.development);
        assert!(config.jwt_secret.is_none());
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TMDB_API_KEY", "abc"),
            ("PORT", "8080"),
            ("CACHE_ENABLED", "false"),
            ("CACHE_MAX_ENTRIES", "10"),
            ("APP_ENV", "development"),
            ("JWT_SECRET", "shh"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.cache_enabled);
        assert_eq!(config.cache_max_entries, 10);
        assert!(config.development);
        assert_eq!(config.jwt_secret.as_deref(), Some("shh"));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("TMDB_API_KEY", "abc"), ("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
