//! HTTP client for the TMDB REST API
//!
//! Injects authentication, converts key naming in both directions, rate
//! limits, retries idempotent calls and serves GETs from the injected
//! response cache.

use super::retry_policy::{is_retryable_error, is_retryable_status, RateLimitInfo, RetryPolicy};
use crate::modules::upstream::domain::{repositories::ResponseCacheStore, CacheTtl};
use crate::shared::domain::Session;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::AppConfig;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::utils::naming::{camelize_keys, snake_case_keys};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// How a client authenticates with the upstream
#[derive(Debug, Clone)]
pub enum ApiAuth {
    /// v3: `api_key` query param, plus `session_id` for user calls
    ApiKey(String),
    /// v4: bearer token, the user's access token when present
    Bearer { app_token: Option<String> },
}

/// Construction parameters for [`TmdbClient`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub provider_name: String,
    pub base_url: String,
    pub auth: ApiAuth,
    pub timeout: Duration,
    pub retry_policy: RetryPolicy,
    pub requests_per_second: u32,
    pub burst: u32,
}

impl ClientSettings {
    pub fn v3(config: &AppConfig) -> Self {
        Self {
            provider_name: "TMDB v3".to_string(),
            base_url: config.v3_base_url.clone(),
            auth: ApiAuth::ApiKey(config.tmdb_api_key.clone()),
            timeout: config.request_timeout,
            retry_policy: RetryPolicy::tmdb(),
            requests_per_second: 40,
            burst: 20,
        }
    }

    pub fn v4(config: &AppConfig) -> Self {
        Self {
            provider_name: "TMDB v4".to_string(),
            base_url: config.v4_base_url.clone(),
            auth: ApiAuth::Bearer {
                app_token: config.tmdb_read_access_token.clone(),
            },
            timeout: config.request_timeout,
            retry_policy: RetryPolicy::tmdb(),
            requests_per_second: 40,
            burst: 20,
        }
    }
}

/// Upstream HTTP client shared by every request
pub struct TmdbClient {
    client: Client,
    rate_limiter: DefaultDirectRateLimiter,
    retry_policy: RetryPolicy,
    base_url: String,
    auth: ApiAuth,
    cache: Arc<dyn ResponseCacheStore>,
    provider_name: String,
}

impl TmdbClient {
    pub fn new(settings: ClientSettings, cache: Arc<dyn ResponseCacheStore>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(settings.requests_per_second, settings.burst),
            retry_policy: settings.retry_policy,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            auth: settings.auth,
            cache,
            provider_name: settings.provider_name,
        })
    }

    fn create_rate_limiter(requests_per_second: u32, burst: u32) -> DefaultDirectRateLimiter {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(burst).unwrap_or(NonZeroU32::MIN);
        RateLimiter::direct(Quota::per_second(rate).allow_burst(burst))
    }

    pub fn cache(&self) -> &Arc<dyn ResponseCacheStore> {
        &self.cache
    }

    /// GET with caching. `params` is a camelCase object (or null).
    pub async fn get(
        &self,
        path: &str,
        params: Value,
        ttl: CacheTtl,
        session: Option<&Session>,
    ) -> AppResult<Value> {
        let query = self.build_query(params, session)?;
        let key = self.request_signature(path, &query, session);

        if ttl.is_cacheable() {
            if let Some(cached) = self.cache.get(&key).await {
                LogContext::cache_hit(&self.provider_name, path);
                return Ok(cached);
            }
        }

        let response = self
            .send_with_retries(Method::GET, path, &query, None, session)
            .await?;

        if ttl.is_cacheable() {
            self.cache.put(&key, response.clone(), ttl.duration()).await;
        }
        Ok(response)
    }

    pub async fn post(
        &self,
        path: &str,
        body: Value,
        session: Option<&Session>,
    ) -> AppResult<Value> {
        let query = self.build_query(Value::Null, session)?;
        self.send_with_retries(Method::POST, path, &query, Some(snake_case_keys(body)), session)
            .await
    }

    pub async fn put(
        &self,
        path: &str,
        body: Value,
        session: Option<&Session>,
    ) -> AppResult<Value> {
        let query = self.build_query(Value::Null, session)?;
        self.send_with_retries(Method::PUT, path, &query, Some(snake_case_keys(body)), session)
            .await
    }

    pub async fn delete(
        &self,
        path: &str,
        body: Option<Value>,
        session: Option<&Session>,
    ) -> AppResult<Value> {
        let query = self.build_query(Value::Null, session)?;
        self.send_with_retries(Method::DELETE, path, &query, body.map(snake_case_keys), session)
            .await
    }

    /// Drop cached GETs of `path` (any params, any identity)
    pub async fn invalidate(&self, path: &str) -> usize {
        let prefix = format!("GET {}{}?", self.base_url, normalize_path(path));
        self.cache.invalidate_prefix(&prefix).await
    }

    /// Outbound query params: snake_cased, flattened, sorted, with auth injected
    fn build_query(
        &self,
        params: Value,
        session: Option<&Session>,
    ) -> AppResult<BTreeMap<String, String>> {
        let mut query = flatten_params(snake_case_keys(params))?;

        if let ApiAuth::ApiKey(api_key) = &self.auth {
            query.insert("api_key".to_string(), api_key.clone());
            if let Some(session_id) = session.and_then(|s| s.session_id.as_deref()) {
                query.insert("session_id".to_string(), session_id.to_string());
            }
        }
        Ok(query)
    }

    /// Cache key: method, full path, sorted params (credentials excluded) and caller identity
    pub fn request_signature(
        &self,
        path: &str,
        query: &BTreeMap<String, String>,
        session: Option<&Session>,
    ) -> String {
        let params = query
            .iter()
            .filter(|(k, _)| k.as_str() != "api_key" && k.as_str() != "session_id")
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let mut key = format!("GET {}{}?{}", self.base_url, normalize_path(path), params);
        if let Some(identity) = session.and_then(|s| s.cache_identity()) {
            key.push('#');
            key.push_str(identity);
        }
        key
    }

    /// Make a request with automatic retries and rate limiting
    async fn send_with_retries(
        &self,
        method: Method,
        path: &str,
        query: &BTreeMap<String, String>,
        body: Option<Value>,
        session: Option<&Session>,
    ) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, normalize_path(path));
        let max_retries = if self.retry_policy.allows_method(&method) {
            self.retry_policy.max_retries
        } else {
            0
        };

        let mut attempt = 0;
        loop {
            self.rate_limiter.until_ready().await;
            let timer = TimedOperation::start();

            match self.build_and_send_request(&method, &url, query, &body, session).await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    LogContext::api_call(
                        &self.provider_name,
                        method.as_str(),
                        path,
                        status,
                        timer.elapsed_ms(),
                    );

                    if response.status().is_success() {
                        return self.parse_response(response).await;
                    }

                    if is_retryable_status(status) && attempt < max_retries {
                        let info = RateLimitInfo::from_headers(response.headers());
                        let delay = self.retry_policy.calculate_delay(attempt, info.retry_after);
                        log::warn!(
                            "{} {} {} returned {} (attempt {}/{}). Retrying in {:?}",
                            self.provider_name,
                            method,
                            path,
                            status,
                            attempt + 1,
                            max_retries + 1,
                            delay
                        );
                        sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(self.error_from_response(response).await);
                }
                Err(e) => {
                    if is_retryable_error(&e) && attempt < max_retries {
                        let delay = self.retry_policy.calculate_delay(attempt, None);
                        log::warn!(
                            "{} {} {} failed (attempt {}/{}): {}. Retrying in {:?}",
                            self.provider_name,
                            method,
                            path,
                            attempt + 1,
                            max_retries + 1,
                            e,
                            delay
                        );
                        sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    log::error!("{} {} {} failed: {}", self.provider_name, method, path, e);
                    return Err(AppError::from(e));
                }
            }
        }
    }

    /// Build and send the actual HTTP request
    async fn build_and_send_request(
        &self,
        method: &Method,
        url: &str,
        query: &BTreeMap<String, String>,
        body: &Option<Value>,
        session: Option<&Session>,
    ) -> Result<Response, reqwest::Error> {
        let mut request_builder = self
            .client
            .request(method.clone(), url)
            .header("Accept", "application/json")
            .query(query);

        if let ApiAuth::Bearer { app_token } = &self.auth {
            let token = session
                .and_then(|s| s.access_token.as_deref())
                .or(app_token.as_deref());
            if let Some(token) = token {
                request_builder = request_builder.bearer_auth(token);
            }
        }

        if let Some(json_body) = body {
            request_builder = request_builder.json(json_body);
        }

        request_builder.send().await
    }

    /// Parse a 2xx body and convert its keys to camelCase
    async fn parse_response(&self, response: Response) -> AppResult<Value> {
        let response_text = response.text().await.map_err(|e| {
            AppError::Serialization(format!(
                "Failed to read {} response: {}",
                self.provider_name, e
            ))
        })?;

        if response_text.trim().is_empty() {
            return Ok(Value::Null);
        }

        let value: Value = serde_json::from_str(&response_text).map_err(|e| {
            AppError::Serialization(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                truncate(&response_text, 200)
            ))
        })?;
        Ok(camelize_keys(value))
    }

    /// Typed failure carrying the upstream status and `status_message`
    async fn error_from_response(&self, response: Response) -> AppError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| {
                body.get("status_message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Upstream request failed")
                    .to_string()
            });

        if status.as_u16() == 429 {
            return AppError::RateLimit(message);
        }
        AppError::Upstream {
            status: status.as_u16(),
            message,
        }
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        return text.to_string();
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Flatten a snake_cased param object into query pairs.
/// Nulls are dropped and arrays are comma-joined, as TMDB expects.
pub fn flatten_params(params: Value) -> AppResult<BTreeMap<String, String>> {
    let object = match params {
        Value::Null => return Ok(BTreeMap::new()),
        Value::Object(object) => object,
        other => {
            return Err(AppError::InvalidInput(format!(
                "query params must be an object, got {}",
                other
            )))
        }
    };

    let mut query = BTreeMap::new();
    for (key, value) in object {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Array(items) => items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(|v| match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        };
        query.insert(key, rendered);
    }
    Ok(query)
}
