//! Error types for the etsy3 client.

use crate::oauth::OAuthError;
use thiserror::Error;

/// The main error type for etsy3.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (config files, log directories)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport failures: DNS, connection refused, TLS, broken bodies
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// The token endpoint rejected an OAuth request
    #[error("Token exchange failed: {0}")]
    TokenExchange(OAuthError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed URLs
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Missing or unusable credentials for the requested auth mode
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new auth error.
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Returns the provider error if this is a rejected token request.
    pub fn oauth(&self) -> Option<&OAuthError> {
        match self {
            Self::TokenExchange(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error is recoverable (caller can retry the same call).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_connect() || err.is_timeout(),
            _ => false,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Request construction failures are caller input problems; everything else
/// reqwest reports happened on the wire.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::InvalidInput(format!("could not build request: {err}"))
        } else {
            Self::Transport(err)
        }
    }
}
