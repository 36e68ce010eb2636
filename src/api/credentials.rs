//! Credentials held by an [`ApiClient`](super::ApiClient).

use std::fmt;

const MASK_PREFIX_LEN: usize = 6;
const MASK_SUFFIX_LEN: usize = 4;

/// Token type Etsy issues for OAuth2 access tokens.
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Access token and application identity used for authenticated calls.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// OAuth2 access token.
    pub access_token: String,
    /// Token type placed in front of the token in `Authorization`.
    pub token_type: String,
    /// Application keystring, sent as `x-api-key`.
    pub client_id: String,
    /// Application shared secret, only needed for basic auth.
    pub client_secret: Option<String>,
}

impl Credentials {
    /// Create bearer credentials for an application.
    pub fn new(access_token: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: DEFAULT_TOKEN_TYPE.to_string(),
            client_id: client_id.into(),
            client_secret: None,
        }
    }

    /// Override the token type.
    pub fn with_token_type(mut self, token_type: impl Into<String>) -> Self {
        let token_type = token_type.into();
        if !token_type.trim().is_empty() {
            self.token_type = token_type;
        }
        self
    }

    /// Attach the application shared secret.
    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    /// Whether an access token is present.
    pub fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    /// Value of the `Authorization` header for token-mode calls.
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// Numeric user id Etsy prefixes to access tokens (`<user_id>.<token>`).
    pub fn user_id(&self) -> Option<u64> {
        self.access_token
            .split_once('.')
            .and_then(|(id, _)| id.parse().ok())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &mask_secret(&self.access_token))
            .field("token_type", &self.token_type)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_deref().map(mask_secret),
            )
            .finish()
    }
}

/// Shorten a secret to a recognizable prefix and suffix.
pub(crate) fn mask_secret(secret: &str) -> String {
    let trimmed = secret.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let len = trimmed.chars().count();
    if len <= MASK_PREFIX_LEN + MASK_SUFFIX_LEN {
        return "*".repeat(len.min(8));
    }

    let prefix: String = trimmed.chars().take(MASK_PREFIX_LEN).collect();
    let suffix: String = trimmed.chars().skip(len - MASK_SUFFIX_LEN).collect();
    format!("{prefix}...{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_authorization_value() {
        let creds = Credentials::new("12345678.abcdef", "keystring");
        assert_eq!(creds.authorization_value(), "Bearer 12345678.abcdef");

        let creds = creds.with_token_type("MAC");
        assert_eq!(creds.authorization_value(), "MAC 12345678.abcdef");
    }

    #[test]
    fn test_blank_token_type_keeps_default() {
        let creds = Credentials::new("t", "k").with_token_type("  ");
        assert_eq!(creds.token_type, DEFAULT_TOKEN_TYPE);
    }

    #[test]
    fn test_user_id_from_token_prefix() {
        assert_eq!(Credentials::new("12345678.abcdef", "k").user_id(), Some(12345678));
        assert_eq!(Credentials::new("abcdef", "k").user_id(), None);
        assert_eq!(Credentials::new("x1.abcdef", "k").user_id(), None);
    }

    #[test]
    fn test_debug_masks_secrets() {
        let creds =
            Credentials::new("12345678.abcdefghijkl", "keystring").with_client_secret("s3cr3t");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("abcdefghijkl"));
        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("keystring"));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdef1234567890"), "abcdef...7890");
        assert_eq!(mask_secret("abcd"), "****");
        assert_eq!(mask_secret("   "), "");
    }
}
