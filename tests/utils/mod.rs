//! Shared harness: a mockito upstream behind real clients and the real schema
#![allow(dead_code)]

pub mod fixtures;

use async_graphql::{Request, Response};
use cinegraph::shared::domain::Session;
use cinegraph::{build_schema, AppConfig, AppSchema, Upstream};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;

pub const API_KEY: &str = "test-key";

pub struct TestGraph {
    pub server: ServerGuard,
    pub upstream: Upstream,
    pub schema: AppSchema,
}

impl TestGraph {
    pub async fn start() -> Self {
        Self::start_with(&[]).await
    }

    /// Harness with the response cache turned off
    pub async fn start_uncached() -> Self {
        Self::start_with(&[("CACHE_ENABLED", "false")]).await
    }

    pub async fn start_with(overrides: &[(&str, &str)]) -> Self {
        let server = Server::new_async().await;
        let url = server.url();
        let config = AppConfig::from_lookup(|key| {
            if let Some((_, value)) = overrides.iter().find(|(name, _)| *name == key) {
                return Some(value.to_string());
            }
            match key {
                "TMDB_API_KEY" => Some(API_KEY.to_string()),
                "TMDB_READ_ACCESS_TOKEN" => Some("app-token".to_string()),
                "TMDB_V3_BASE_URL" => Some(format!("{}/3", url)),
                "TMDB_V4_BASE_URL" => Some(format!("{}/4", url)),
                _ => None,
            }
        })
        .expect("test config should load");
        let upstream = Upstream::from_config(&config).expect("clients should build");

        Self {
            server,
            upstream,
            schema: build_schema(),
        }
    }

    pub async fn execute(&self, query: &str) -> Response {
        self.execute_as(query, None).await
    }

    pub async fn execute_as(&self, query: &str, session: Option<Session>) -> Response {
        let request = Request::new(query).data(self.upstream.data_sources(session));
        self.schema.execute(request).await
    }

    /// JSON responder for `method path`, any query string
    pub fn respond(&mut self, method: &str, path: &str, status: usize, body: &Value) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
    }
}

/// Signed-in user with both v3 and v4 credentials
pub fn user_session() -> Session {
    Session {
        session_id: Some("sess-1".to_string()),
        account_id: Some(7),
        access_token: Some("user-token".to_string()),
        account_object_id: Some("5e7f00".to_string()),
    }
}

pub fn data(response: &Response) -> Value {
    response
        .data
        .clone()
        .into_json()
        .expect("response data should convert to JSON")
}
