//! Request descriptors.
//!
//! An [`ApiRequest`] is built per call, handed to
//! [`ApiClient::send`](super::ApiClient::send) and then discarded.

use super::params;
use crate::error::{Error, Result};
use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

/// How a request authenticates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// No authentication header.
    None,
    /// HTTP basic auth with the application keystring and shared secret.
    Basic,
    /// `Authorization: <token_type> <access_token>` plus `x-api-key`.
    #[default]
    Token,
}

/// Request payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
    /// `application/json` document.
    Json(serde_json::Value),
}

/// A single outbound call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    base_url: Option<Url>,
    headers: HeaderMap,
    query: Vec<(String, String)>,
    body: RequestBody,
    auth: AuthMode,
}

impl ApiRequest {
    /// Create a token-authenticated request without parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            base_url: None,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
            auth: AuthMode::default(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append query parameters from a serializable struct or map.
    pub fn with_query<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        self.query.extend(params::to_pairs(params)?);
        Ok(self)
    }

    /// Replace the body with form-encoded parameters.
    pub fn with_form<P: Serialize + ?Sized>(mut self, params: &P) -> Result<Self> {
        self.body = RequestBody::Form(params::to_pairs(params)?);
        Ok(self)
    }

    /// Replace the body with a JSON document.
    pub fn with_json<P: Serialize + ?Sized>(mut self, body: &P) -> Result<Self> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Add a custom header.
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::try_from(name)
            .map_err(|e| Error::invalid_input(format!("invalid header name `{name}`: {e}")))?;
        let value = HeaderValue::try_from(value)
            .map_err(|e| Error::invalid_input(format!("invalid header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Send this request to a different host than the client's base URL.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Choose the authentication mode.
    pub fn with_auth(mut self, auth: AuthMode) -> Self {
        self.auth = auth;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub fn auth(&self) -> AuthMode {
        self.auth
    }

    /// Look up a parameter by name in the query string or form body.
    pub fn param(&self, name: &str) -> Option<&str> {
        let form: &[(String, String)] = match &self.body {
            RequestBody::Form(pairs) => pairs.as_slice(),
            _ => &[],
        };
        self.query
            .iter()
            .chain(form)
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Names of all query and form parameters, in insertion order.
    pub fn param_names(&self) -> Vec<&str> {
        let form: &[(String, String)] = match &self.body {
            RequestBody::Form(pairs) => pairs.as_slice(),
            _ => &[],
        };
        self.query
            .iter()
            .chain(form)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// The JSON body, if any.
    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            RequestBody::Json(value) => Some(value),
            _ => None,
        }
    }
}
