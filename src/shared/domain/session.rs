use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::shared::errors::{AppError, AppResult};

/// Authenticated user identity for one incoming request.
///
/// v3 endpoints authenticate with `session_id`/`account_id`, v4 endpoints with
/// the user access token and the account object id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub account_id: Option<u64>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub account_object_id: Option<String>,
}

impl Session {
    /// Key fragment that separates cached responses between users
    pub fn cache_identity(&self) -> Option<&str> {
        self.session_id
            .as_deref()
            .or(self.account_object_id.as_deref())
            .or(self.access_token.as_deref())
    }

    pub fn require_session_id(&self) -> AppResult<&str> {
        self.session_id
            .as_deref()
            .ok_or_else(|| AppError::Unauthorized("a TMDB session id is required".to_string()))
    }

    pub fn require_account_id(&self) -> AppResult<u64> {
        self.account_id
            .ok_or_else(|| AppError::Unauthorized("a TMDB account id is required".to_string()))
    }

    pub fn require_account_object_id(&self) -> AppResult<&str> {
        self.account_object_id.as_deref().ok_or_else(|| {
            AppError::Unauthorized("a TMDB v4 account object id is required".to_string())
        })
    }

    pub fn require_access_token(&self) -> AppResult<&str> {
        self.access_token
            .as_deref()
            .ok_or_else(|| {
                AppError::Unauthorized("a TMDB user access token is required".to_string())
            })
    }
}

/// Decodes the caller-supplied `Authorization` header into a [`Session`]
#[derive(Clone)]
pub struct SessionDecoder {
    key: DecodingKey,
    validation: Validation,
}

impl SessionDecoder {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // `exp` is validated when present but not required
        validation.required_spec_claims = HashSet::new();
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn decode_header(&self, header: &str) -> AppResult<Session> {
        let token = header.trim();
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        if token.is_empty() {
            return Err(AppError::Unauthorized("empty authorization token".to_string()));
        }

        decode::<Session>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("invalid session token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token(secret: &str, session: &Session) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            session,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn decodes_bearer_and_raw_tokens() {
        let session = Session {
            session_id: Some("sess-1".to_string()),
            account_id: Some(7),
            access_token: Some("user-token".to_string()),
            account_object_id: Some("5e7f".to_string()),
        };
        let jwt = token("secret", &session);
        let decoder = SessionDecoder::new("secret");

        assert_eq!(decoder.decode_header(&jwt).unwrap(), session);
        assert_eq!(
            decoder.decode_header(&format!("Bearer {}", jwt)).unwrap(),
            session
        );
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let jwt = token("other", &Session::default());
        let err = SessionDecoder::new("secret").decode_header(&jwt).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn missing_identity_fields_are_unauthorized() {
        let session = Session::default();
        assert!(session.require_session_id().is_err());
        assert!(session.require_account_id().is_err());
        assert!(session.cache_identity().is_none());
    }
}
