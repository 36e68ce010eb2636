//! OAuth2 authorization-code client with PKCE for Etsy.

use super::pkce::{self, CHALLENGE_METHOD, MAX_VERIFIER_LEN};
use super::token::{OAuthError, TokenResponse};
use crate::api::credentials::mask_secret;
use crate::config::OAuthConfig;
use crate::error::{Error, Result};
use chrono::Utc;
use reqwest::header::{ACCEPT, HeaderValue};
use std::fmt;
use url::Url;

/// Etsy's authorization endpoint.
pub const AUTHORIZATION_URL: &str = "https://www.etsy.com/oauth/connect";
/// Etsy's token endpoint.
pub const TOKEN_URL: &str = "https://api.etsy.com/v3/public/oauth/token";

/// Authentication client for connecting an application to an Etsy account.
///
/// The code verifier is created once per client and reused for the
/// authorization URL and the later code exchange, so one client instance
/// drives one authorization flow.
#[derive(Clone)]
pub struct EtsyOAuthClient {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: Option<String>,
    scopes: Vec<String>,
    code_verifier: String,
    authorization_url: Url,
    token_url: Url,
}

impl EtsyOAuthClient {
    /// Create a client with a freshly generated 128-character code verifier.
    ///
    /// # Arguments
    /// * `client_id` - Keystring from the Etsy developer console
    /// * `client_secret` - Shared secret; when empty, token requests skip basic auth
    /// * `redirect_uri` - Redirect URI registered for the application
    /// * `scopes` - Scopes to request, e.g. `transactions_r`
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: Option<String>,
        scopes: Vec<String>,
    ) -> Result<Self> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return Err(Error::config("OAuth client_id is required"));
        }

        Ok(Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret: client_secret.into(),
            redirect_uri,
            scopes,
            code_verifier: pkce::generate_code_verifier(MAX_VERIFIER_LEN)?,
            authorization_url: Url::parse(AUTHORIZATION_URL)?,
            token_url: Url::parse(TOKEN_URL)?,
        })
    }

    /// Create a client from configuration.
    pub fn from_config(config: &OAuthConfig) -> Result<Self> {
        Self::new(
            &config.client_id,
            &config.client_secret,
            config.redirect_uri.clone(),
            config.scopes.clone(),
        )?
        .with_endpoints(&config.authorization_url, &config.token_url)
    }

    /// Use a caller-supplied code verifier, e.g. one saved from an earlier
    /// `authorize` step.
    pub fn with_code_verifier(mut self, verifier: impl Into<String>) -> Result<Self> {
        let verifier = verifier.into();
        pkce::validate_code_verifier(&verifier)?;
        self.code_verifier = verifier;
        Ok(self)
    }

    /// Point the client at different provider endpoints.
    pub fn with_endpoints(mut self, authorization_url: &str, token_url: &str) -> Result<Self> {
        self.authorization_url = Url::parse(authorization_url)?;
        self.token_url = Url::parse(token_url)?;
        Ok(self)
    }

    /// Reuse an existing connection pool.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// The verifier bound to this flow.
    pub fn code_verifier(&self) -> &str {
        &self.code_verifier
    }

    /// S256 challenge derived from the stored verifier.
    pub fn code_challenge(&self) -> String {
        pkce::code_challenge_s256(&self.code_verifier)
    }

    /// Authorization URL and the `state` generated for it.
    pub fn authorization_url(&self) -> (Url, String) {
        self.authorization_url_with(std::iter::empty::<(&str, &str)>())
    }

    /// Authorization URL with additional query parameters appended.
    pub fn authorization_url_with<I, K, V>(&self, extra: I) -> (Url, String)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let state = pkce::generate_state();
        let mut url = self.authorization_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("response_type", "code")
                .append_pair("client_id", &self.client_id);
            if let Some(redirect_uri) = &self.redirect_uri {
                query.append_pair("redirect_uri", redirect_uri);
            }
            if !self.scopes.is_empty() {
                query.append_pair("scope", &self.scopes.join(" "));
            }
            query
                .append_pair("state", &state)
                .append_pair("code_challenge", &self.code_challenge())
                .append_pair("code_challenge_method", CHALLENGE_METHOD);
            for (key, value) in extra {
                query.append_pair(key.as_ref(), value.as_ref());
            }
        }
        (url, state)
    }

    /// Build the authorization-code exchange request without sending it.
    pub fn fetch_token_request(&self, code: &str) -> Result<reqwest::Request> {
        let mut form = vec![
            ("grant_type", "authorization_code"),
            ("code", code),
        ];
        if let Some(redirect_uri) = &self.redirect_uri {
            form.push(("redirect_uri", redirect_uri.as_str()));
        }
        form.push(("client_id", self.client_id.as_str()));
        form.push(("code_verifier", self.code_verifier.as_str()));
        self.token_request(&form)
    }

    /// Build the refresh request without sending it.
    pub fn refresh_token_request(&self, refresh_token: &str) -> Result<reqwest::Request> {
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.client_id.as_str()),
        ];
        self.token_request(&form)
    }

    /// Exchange an authorization code for an access token.
    pub async fn fetch_token(&self, code: &str) -> Result<TokenResponse> {
        let request = self.fetch_token_request(code)?;
        self.exchange(request, "authorization_code").await
    }

    /// Get a new access token using a refresh token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse> {
        let request = self.refresh_token_request(refresh_token)?;
        self.exchange(request, "refresh_token").await
    }

    fn token_request(&self, form: &[(&str, &str)]) -> Result<reqwest::Request> {
        let mut builder = self
            .http
            .post(self.token_url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(form);
        if !self.client_secret.is_empty() {
            builder = builder.basic_auth(&self.client_id, Some(&self.client_secret));
        }
        Ok(builder.build()?)
    }

    async fn exchange(&self, request: reqwest::Request, grant: &str) -> Result<TokenResponse> {
        tracing::debug!(grant, url = %request.url(), "requesting OAuth token");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let received_at = Utc::now();
        let body = response.text().await?;

        if !status.is_success() {
            let err = OAuthError::from_response(status.as_u16(), &body);
            tracing::warn!(
                grant,
                status = status.as_u16(),
                kind = %err.kind,
                "OAuth token request rejected"
            );
            return Err(Error::TokenExchange(err));
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        tracing::info!(grant, expires_in = ?token.expires_in, "OAuth token request succeeded");
        Ok(token.stamp(received_at))
    }
}

impl fmt::Debug for EtsyOAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EtsyOAuthClient")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("authorization_url", &self.authorization_url.as_str())
            .field("token_url", &self.token_url.as_str())
            .finish_non_exhaustive()
    }
}
