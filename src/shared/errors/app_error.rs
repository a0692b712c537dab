use async_graphql::ErrorExtensions;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code exposed in GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Upstream { status: 401, .. } | AppError::Unauthorized(_) => "UNAUTHENTICATED",
            AppError::Upstream { status: 404, .. } | AppError::NotFound(_) => "NOT_FOUND",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::RateLimit(_) => "RATE_LIMITED",
            AppError::InvalidInput(_) => "BAD_USER_INPUT",
            AppError::Serialization(_) => "BAD_UPSTREAM_RESPONSE",
            AppError::Config(_) | AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Message suitable for a soft mutation failure
    pub fn user_message(&self) -> String {
        match self {
            AppError::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let Some(status) = self.status() {
                e.set("upstreamStatus", status as i32);
            }
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Network("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::Network("Failed to connect to upstream service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimit("Too many requests".to_string()),
                code => AppError::Upstream {
                    status: code,
                    message: err.to_string(),
                },
            }
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
