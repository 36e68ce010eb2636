//! Token endpoint payloads.

use crate::api::Credentials;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Successful token endpoint response.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    /// When the access token expires, computed on receipt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenResponse {
    /// Fill `expires_at` relative to `received_at`.
    pub(crate) fn stamp(mut self, received_at: DateTime<Utc>) -> Self {
        self.expires_at = self
            .expires_in
            .filter(|secs| *secs > 0)
            .map(|secs| received_at + Duration::seconds(secs));
        self
    }

    /// Whether the access token has expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }

    /// Granted scopes.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope
            .as_deref()
            .map(|s| s.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// API credentials for this token.
    pub fn into_credentials(self, client_id: impl Into<String>) -> Credentials {
        Credentials::new(self.access_token, client_id).with_token_type(self.token_type)
    }
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::api::credentials::mask_secret;
        f.debug_struct("TokenResponse")
            .field("access_token", &mask_secret(&self.access_token))
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &self.refresh_token.as_deref().map(mask_secret))
            .field("scope", &self.scope)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// RFC 6749 section 5.2 error codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthErrorKind {
    InvalidRequest,
    InvalidClient,
    InvalidGrant,
    UnauthorizedClient,
    UnsupportedGrantType,
    InvalidScope,
    /// Any other code the provider returned, or none at all.
    Other(Option<String>),
}

impl OAuthErrorKind {
    fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("invalid_request") => Self::InvalidRequest,
            Some("invalid_client") => Self::InvalidClient,
            Some("invalid_grant") => Self::InvalidGrant,
            Some("unauthorized_client") => Self::UnauthorizedClient,
            Some("unsupported_grant_type") => Self::UnsupportedGrantType,
            Some("invalid_scope") => Self::InvalidScope,
            other => Self::Other(other.map(str::to_string)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidScope => "invalid_scope",
            Self::Other(Some(code)) => code,
            Self::Other(None) => "unknown_error",
        }
    }
}

impl fmt::Display for OAuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token request the provider rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthError {
    /// HTTP status of the token endpoint response.
    pub status: u16,
    pub kind: OAuthErrorKind,
    pub description: Option<String>,
}

impl OAuthError {
    /// Parse a non-2xx token endpoint body.
    ///
    /// Accepts the standard `{"error", "error_description"}` shape as well as
    /// `{"error": {"code"|"type", "message"}}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let value: Value = serde_json::from_str(body).unwrap_or(Value::Null);

        let mut code = non_empty(value.get("error").and_then(Value::as_str));
        let mut description = non_empty(value.get("error_description").and_then(Value::as_str));

        if let Some(error) = value.get("error").and_then(Value::as_object) {
            if code.is_none() {
                code = non_empty(
                    error
                        .get("code")
                        .and_then(Value::as_str)
                        .or_else(|| error.get("type").and_then(Value::as_str)),
                );
            }
            if description.is_none() {
                description = non_empty(error.get("message").and_then(Value::as_str));
            }
        }

        if code.is_none() && description.is_none() && !body.trim().is_empty() {
            description = Some(body.trim().chars().take(240).collect());
        }

        Self {
            status,
            kind: OAuthErrorKind::from_code(code.as_deref()),
            description,
        }
    }
}

impl fmt::Display for OAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.kind, self.status)?;
        if let Some(description) = &self.description {
            write!(f, ": {description}")?;
        }
        Ok(())
    }
}

impl std::error::Error for OAuthError {}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
