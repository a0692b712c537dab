//! HTTP surface: the GraphQL endpoint, GraphiQL and a health probe
use async_graphql::http::GraphiQLSource;
use async_graphql::{ServerError, Value as GqlValue};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::context::Upstream;
use super::schema::{build_schema, AppSchema};
use crate::shared::domain::{Session, SessionDecoder};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::AppConfig;

#[derive(Clone)]
pub struct AppState {
    schema: AppSchema,
    upstream: Upstream,
    decoder: Option<Arc<SessionDecoder>>,
    development: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, upstream: Upstream) -> Self {
        if config.jwt_secret.is_none() {
            log::warn!("JWT_SECRET is not set; every request will be anonymous");
        }
        Self {
            schema: build_schema(),
            upstream,
            decoder: config
                .jwt_secret
                .as_deref()
                .map(|secret| Arc::new(SessionDecoder::new(secret))),
            development: config.development,
        }
    }

    /// Session from the `Authorization` header. Anything that does not
    /// decode makes the request anonymous.
    fn session(&self, headers: &HeaderMap) -> Option<Session> {
        let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
        let decoder = self.decoder.as_ref()?;
        match decoder.decode_header(header) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("Ignoring authorization header: {}", err);
                None
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .route("/health", get(health))
        .with_state(state)
}

async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let sources = state.upstream.data_sources(state.session(&headers));
    let mut response = state.schema.execute(request.into_inner().data(sources)).await;

    if state.development {
        for error in &response.errors {
            log::warn!("GraphQL error at {:?}: {}", error.path, error.message);
        }
    } else {
        redact_internal(&mut response.errors);
    }
    response.into()
}

/// Hide internal failure detail from clients outside development
fn redact_internal(errors: &mut [ServerError]) {
    let internal = GqlValue::from("INTERNAL_SERVER_ERROR");
    for error in errors.iter_mut() {
        let is_internal = error
            .extensions
            .as_ref()
            .and_then(|extensions| extensions.get("code"))
            .map_or(false, |code| *code == internal);
        if is_internal {
            log::error!("Internal error: {}", error.message);
            error.message = "Internal server error".to_string();
        }
    }
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.upstream.cache_stats();
    Json(json!({
        "status": "ok",
        "cache": {
            "entries": stats.entries_count,
            "hits": stats.hits,
            "misses": stats.misses,
            "hitRate": stats.hit_rate(),
            "evictions": stats.evictions,
        }
    }))
}

/// Bind to `config.port` and serve until Ctrl-C
pub async fn serve(config: AppConfig) -> AppResult<()> {
    let upstream = Upstream::from_config(&config)?;
    let app = router(AppState::new(&config, upstream));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("failed to bind {}: {}", addr, e)))?;
    log::info!("GraphQL endpoint listening on http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            log::info!("Shutdown signal received");
        })
        .await
        .map_err(|e| AppError::Internal(format!("server error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::ErrorExtensions;

    #[test]
    fn internal_errors_are_redacted() {
        let mut errors = vec![
            AppError::Internal("cache poisoned".to_string())
                .extend()
                .into_server_error(async_graphql::Pos::default()),
            AppError::NotFound("movie 1".to_string())
                .extend()
                .into_server_error(async_graphql::Pos::default()),
        ];
        redact_internal(&mut errors);
        assert_eq!(errors[0].message, "Internal server error");
        assert_eq!(errors[1].message, "Not found: movie 1");
    }
}
