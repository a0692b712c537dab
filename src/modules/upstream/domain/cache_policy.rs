use std::time::Duration;

/// Freshness class of an upstream endpoint.
///
/// Every `get` call site names its class explicitly; there is no global default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTtl {
    /// Genre lists, image configuration
    Reference,
    /// Item, person, season and episode detail
    Catalog,
    /// Discover, search and curated list endpoints
    Discovery,
    /// Account data and anything a user can mutate; never cached
    UserScoped,
    /// Explicit override
    Custom(Duration),
}

impl CacheTtl {
    pub fn duration(&self) -> Duration {
        match self {
            CacheTtl::Reference => Duration::from_secs(24 * 60 * 60),
            CacheTtl::Catalog => Duration::from_secs(2 * 60 * 60),
            CacheTtl::Discovery => Duration::from_secs(60 * 60),
            CacheTtl::UserScoped => Duration::ZERO,
            CacheTtl::Custom(ttl) => *ttl,
        }
    }

    pub fn is_cacheable(&self) -> bool {
        !self.duration().is_zero()
    }
}
