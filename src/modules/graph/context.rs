use async_graphql::{Context, ErrorExtensions};
use std::sync::Arc;

use crate::modules::catalog::CatalogSource;
use crate::modules::lists::ListSource;
use crate::modules::upstream::domain::{CacheStats, NoopCache, ResponseCacheStore};
use crate::modules::upstream::{ClientSettings, ResponseCache, TmdbClient};
use crate::shared::domain::Session;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::AppConfig;

/// Upstream clients shared by every request. Both API versions share one
/// response cache.
#[derive(Clone)]
pub struct Upstream {
    v3: Arc<TmdbClient>,
    v4: Arc<TmdbClient>,
}

impl Upstream {
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let cache: Arc<dyn ResponseCacheStore> = if config.cache_enabled {
            Arc::new(ResponseCache::new(config.cache_max_entries))
        } else {
            Arc::new(NoopCache)
        };
        Self::with_cache(config, cache)
    }

    pub fn with_cache(config: &AppConfig, cache: Arc<dyn ResponseCacheStore>) -> AppResult<Self> {
        Ok(Self {
            v3: Arc::new(TmdbClient::new(ClientSettings::v3(config), cache.clone())?),
            v4: Arc::new(TmdbClient::new(ClientSettings::v4(config), cache)?),
        })
    }

    /// Data sources for one request
    pub fn data_sources(&self, session: Option<Session>) -> DataSources {
        DataSources {
            catalog: CatalogSource::new(self.v3.clone(), session.clone()),
            lists: ListSource::new(self.v4.clone(), session),
        }
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.v3.cache().stats()
    }
}

/// Request-scoped data sources, stored in the GraphQL request data
pub struct DataSources {
    pub catalog: CatalogSource,
    pub lists: ListSource,
}

pub fn sources<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a DataSources> {
    ctx.data::<DataSources>().map_err(|_| {
        AppError::Internal("data sources missing from request context".to_string()).extend()
    })
}
