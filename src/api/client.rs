//! Etsy API client wrapper.

use super::credentials::Credentials;
use super::request::{ApiRequest, AuthMode, RequestBody};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use reqwest::Response;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Header carrying the application keystring on token-mode calls.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ApiConfig,
    credentials: Option<Credentials>,
    http: Option<reqwest::Client>,
}

impl ApiClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
            credentials: None,
            http: None,
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the credentials used for authenticated calls.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Reuse an existing connection pool instead of opening a new one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::auth("API client requires credentials"))?;

        match self.http {
            Some(http) => ApiClient::with_http(http, &self.config, credentials),
            None => ApiClient::new(self.config, credentials),
        }
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Etsy Open API v3.
///
/// Owns one `reqwest::Client`, so every call made through the same
/// `ApiClient` (or its clones) reuses the same connection pool. Responses are
/// returned exactly as received; status codes are the caller's to interpret.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared connection pool.
    http: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
    /// Stored credentials.
    credentials: Credentials,
}

impl ApiClient {
    /// Create a new API client with its own connection pool.
    pub fn new(config: ApiConfig, credentials: Credentials) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("could not create HTTP client: {e}")))?;
        Self::with_http(http, &config, credentials)
    }

    fn with_http(
        http: reqwest::Client,
        config: &ApiConfig,
        credentials: Credentials,
    ) -> Result<Self> {
        Url::parse(&config.base_url)?;
        tracing::debug!(base_url = %config.base_url, "opened Etsy API client");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Create a builder.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Base URL requests are sent to unless overridden.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credentials attached to token-mode calls.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Check if the client can make token-authenticated calls.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.has_token()
    }

    /// A client with different credentials sharing this client's pool.
    pub fn with_credentials(&self, credentials: Credentials) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            credentials,
        }
    }

    /// Build the outgoing request without sending it.
    pub fn prepare(&self, request: &ApiRequest) -> Result<reqwest::Request> {
        let base = request
            .base_url()
            .map(Url::as_str)
            .unwrap_or(&self.base_url);
        let url = join_url(base, request.path())?;

        let mut headers = request.headers().clone();
        let mut basic = None;
        match request.auth() {
            AuthMode::None => {}
            AuthMode::Basic => {
                let secret = self.credentials.client_secret.as_deref().ok_or_else(|| {
                    Error::auth("basic auth requested but no client secret is configured")
                })?;
                headers.remove(AUTHORIZATION);
                basic = Some((self.credentials.client_id.as_str(), secret));
            }
            AuthMode::Token => {
                if !self.credentials.has_token() {
                    return Err(Error::auth(
                        "token auth requested but no access token is configured",
                    ));
                }
                let mut authorization = header_value(&self.credentials.authorization_value())?;
                authorization.set_sensitive(true);
                headers.insert(AUTHORIZATION, authorization);
                headers.insert(
                    HeaderName::from_static(API_KEY_HEADER),
                    header_value(&self.credentials.client_id)?,
                );
            }
        }

        let mut builder = self
            .http
            .request(request.method().clone(), url)
            .headers(headers);
        if !request.query().is_empty() {
            builder = builder.query(request.query());
        }
        if let Some((user, password)) = basic {
            builder = builder.basic_auth(user, Some(password));
        }
        builder = match request.body() {
            RequestBody::Empty => builder,
            RequestBody::Form(pairs) => builder.form(pairs),
            RequestBody::Json(value) => builder.json(value),
        };

        Ok(builder.build()?)
    }

    /// Send exactly one request and return the response unaltered.
    pub async fn send(&self, request: ApiRequest) -> Result<Response> {
        let outgoing = self.prepare(&request)?;
        let method = outgoing.method().clone();
        let url = outgoing.url().clone();
        tracing::debug!(%method, %url, auth = ?request.auth(), "sending Etsy API request");

        let response = self.http.execute(outgoing).await.map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "Etsy API request failed");
            Error::from(e)
        })?;

        tracing::debug!(%method, %url, status = %response.status(), "received Etsy API response");
        Ok(response)
    }

    /// Token-authenticated GET with query parameters.
    pub async fn get<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Response> {
        self.send(ApiRequest::get(path).with_query(params)?).await
    }

    /// Token-authenticated POST with a form body.
    pub async fn post<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Response> {
        self.send(ApiRequest::post(path).with_form(params)?).await
    }

    /// Token-authenticated PUT with a form body.
    pub async fn put<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Response> {
        self.send(ApiRequest::put(path).with_form(params)?).await
    }

    /// Token-authenticated PATCH with a form body.
    pub async fn patch<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Response> {
        self.send(ApiRequest::patch(path).with_form(params)?).await
    }

    /// Token-authenticated DELETE with query parameters.
    pub async fn delete<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Response> {
        self.send(ApiRequest::delete(path).with_query(params)?).await
    }

    /// Close the client, releasing its connection pool once no clones remain.
    pub fn shutdown(self) {
        tracing::debug!(base_url = %self.base_url, "closing Etsy API client");
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::invalid_input(format!("credential is not a valid header value: {e}")))
}

/// Join a base URL and a path, keeping any path prefix on the base.
fn join_url(base: &str, path: &str) -> Result<Url> {
    let base = base.trim_end_matches('/');
    let url = if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    };
    Ok(Url::parse(&url)?)
}
