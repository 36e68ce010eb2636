//! Etsy Open API v3 integration.
//!
//! This module provides the authenticated request layer ([`ApiClient`]) and
//! one submodule per resource family under [`endpoints`].

mod client;
pub(crate) mod credentials;
pub mod endpoints;
pub mod params;
mod request;

pub use client::{API_KEY_HEADER, ApiClient, ApiClientBuilder};
pub use credentials::{Credentials, DEFAULT_TOKEN_TYPE};
pub use endpoints::{inventory, listings, properties, receipts, sections, transactions};
pub use params::{Page, SortOrder};
pub use request::{ApiRequest, AuthMode, RequestBody};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://openapi.etsy.com";
