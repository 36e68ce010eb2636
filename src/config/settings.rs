//! Configuration settings for etsy3.

use crate::api::{ApiClient, Credentials, DEFAULT_BASE_URL};
use crate::oauth::{AUTHORIZATION_URL, EtsyOAuthClient, TOKEN_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// API configuration.
    pub api: ApiConfig,
    /// OAuth application settings.
    pub oauth: OAuthConfig,
    /// Stored access token.
    pub credentials: CredentialsConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to defaults.
    pub fn load_or_default() -> crate::Result<Self> {
        Self::load(None)
    }

    /// Load configuration from a TOML file, then apply `ETSY3__*` environment
    /// overrides. A missing file is not an error.
    pub fn load(path: Option<PathBuf>) -> crate::Result<Self> {
        let config_path = path.unwrap_or_else(super::config_file);
        tracing::debug!(path = %config_path.display(), "loading configuration");

        let settings = config::Config::builder()
            .add_source(
                config::File::from(config_path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(super::ENV_PREFIX).separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Save configuration to file.
    pub fn save(&self, path: Option<PathBuf>) -> crate::Result<PathBuf> {
        let config_path = path.unwrap_or_else(super::config_file);

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(config_path)
    }

    /// Stored credentials combined with the application identity.
    pub fn credentials(&self) -> Credentials {
        let mut credentials =
            Credentials::new(&self.credentials.access_token, &self.oauth.client_id)
                .with_token_type(&self.credentials.token_type);
        if !self.oauth.client_secret.is_empty() {
            credentials = credentials.with_client_secret(&self.oauth.client_secret);
        }
        credentials
    }

    /// Build an API client from this configuration.
    pub fn api_client(&self) -> crate::Result<ApiClient> {
        ApiClient::builder()
            .config(self.api.clone())
            .credentials(self.credentials())
            .build()
    }

    /// Build an OAuth client from this configuration.
    pub fn oauth_client(&self) -> crate::Result<EtsyOAuthClient> {
        EtsyOAuthClient::from_config(&self.oauth)
    }
}

/// API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Etsy API base URL.
    pub base_url: String,
    /// Request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// OAuth application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OAuthConfig {
    /// Application keystring from the Etsy developer console.
    pub client_id: String,
    /// Application shared secret.
    pub client_secret: String,
    /// Registered redirect URI.
    pub redirect_uri: Option<String>,
    /// Requested scopes, e.g. `transactions_r`.
    pub scopes: Vec<String>,
    /// Authorization endpoint.
    pub authorization_url: String,
    /// Token endpoint.
    pub token_url: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            redirect_uri: None,
            scopes: Vec::new(),
            authorization_url: AUTHORIZATION_URL.to_string(),
            token_url: TOKEN_URL.to_string(),
        }
    }
}

/// Stored access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CredentialsConfig {
    /// OAuth2 access token.
    pub access_token: String,
    /// Token type.
    pub token_type: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            token_type: crate::api::DEFAULT_TOKEN_TYPE.to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Also write logs to a daily rolling file.
    pub file: bool,
    /// Directory for log files. Defaults to the platform data directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "etsy3=info".to_string(),
            file: false,
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Directory log files are written to.
    pub fn resolved_directory(&self) -> crate::Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => super::log_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("etsy3-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://openapi.etsy.com");
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.oauth.authorization_url, "https://www.etsy.com/oauth/connect");
        assert_eq!(config.oauth.token_url, "https://api.etsy.com/v3/public/oauth/token");
        assert_eq!(config.credentials.token_type, "Bearer");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Some(temp_path("missing"))).unwrap();
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("roundtrip");
        let mut config = Config::default();
        config.oauth.client_id = "keystring".to_string();
        config.oauth.scopes = vec!["transactions_r".to_string(), "listings_w".to_string()];
        config.oauth.redirect_uri = Some("https://localhost/callback".to_string());
        config.api.timeout_secs = Some(15);

        let written = config.save(Some(path.clone())).unwrap();
        assert!(written.is_file());

        let loaded = Config::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.oauth, config.oauth);
        assert_eq!(loaded.api, config.api);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "[credentials]\naccess_token = \"42.abc\"\n").unwrap();

        let loaded = Config::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.credentials.access_token, "42.abc");
        assert_eq!(loaded.credentials.token_type, "Bearer");
        assert_eq!(loaded.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_credentials_from_config() {
        let mut config = Config::default();
        config.oauth.client_id = "keystring".to_string();
        config.credentials.access_token = "42.abc".to_string();

        let creds = config.credentials();
        assert_eq!(creds.client_id, "keystring");
        assert_eq!(creds.authorization_value(), "Bearer 42.abc");
        assert_eq!(creds.client_secret, None);

        config.oauth.client_secret = "secret".to_string();
        assert_eq!(config.credentials().client_secret.as_deref(), Some("secret"));
    }
}
