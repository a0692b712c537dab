//! Result shape shared by every user-scoped write
//!
//! Data sources never return `Err` from a mutation. Failures are folded into
//! `success: false` plus a message so independent mutations in the same
//! request keep running.
use async_graphql::SimpleObject;
use serde::Deserialize;

use crate::shared::domain::value_objects::MediaType;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationOutcome {
    pub success: bool,
    pub message: Option<String>,
    /// Identity of the mutated list, when there is one
    pub id: Option<String>,
    /// Per-item results for multi-item list writes
    pub results: Option<Vec<ListItemResult>>,
}

/// Outcome of one item in a multi-item list write
#[derive(Debug, Clone, PartialEq, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct ListItemResult {
    pub media_id: u64,
    pub media_type: MediaType,
    #[serde(default)]
    pub success: bool,
}

/// Subset of the upstream status body that every write endpoint returns
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBody {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub results: Option<Vec<ListItemResult>>,
}

impl StatusBody {
    /// Parse a 2xx write response. An empty body carries no status of its
    /// own and counts as success.
    pub fn from_response(body: serde_json::Value) -> AppResult<Self> {
        if body.is_null() {
            return Ok(Self {
                success: Some(true),
                status_message: Some("Success.".to_string()),
                ..Self::default()
            });
        }
        Ok(serde_json::from_value(body)?)
    }
}

impl MutationOutcome {
    pub fn success(message: Option<String>) -> Self {
        Self {
            success: true,
            message,
            ..Self::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_results(mut self, results: Vec<ListItemResult>) -> Self {
        self.results = Some(results);
        self
    }

    /// Build an outcome from an upstream status body.
    /// A body without an explicit `success` flag is treated as success since
    /// the upstream already answered 2xx.
    pub fn from_status(body: StatusBody) -> Self {
        let id = body.id.and_then(|id| match id {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        Self {
            success: body.success.unwrap_or(true),
            message: body.status_message,
            id,
            results: body.results,
        }
    }
}

impl From<AppError> for MutationOutcome {
    fn from(err: AppError) -> Self {
        let message = err.user_message();
        log::warn!("Mutation failed: {}", err);
        Self::failure(if message.is_empty() {
            err.to_string()
        } else {
            message
        })
    }
}
