//! # etsy3 - Etsy Open API v3 client
//!
//! An async client for the Etsy Open API v3, built on reqwest and tokio.
//!
//! ## Architecture
//!
//! - **API**: Authenticated request layer and the endpoint operations
//!   (receipts, transactions, listings, inventory, properties, sections)
//! - **OAuth**: Authorization-code flow with PKCE and token refresh
//! - **Config**: Layered file and environment configuration
//! - **Error**: Crate-wide error type
//!
//! ```no_run
//! # async fn run() -> etsy3::Result<()> {
//! use etsy3::api::receipts::GetShopReceiptsParams;
//!
//! let config = etsy3::Config::load_or_default()?;
//! let client = config.api_client()?;
//! let params = GetShopReceiptsParams {
//!     limit: Some(10),
//!     ..Default::default()
//! };
//! let response = client.get_shop_receipts(12345, &params).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod oauth;

pub use api::{ApiClient, ApiRequest, Credentials};
pub use config::Config;
pub use error::{Error, Result};
pub use oauth::{EtsyOAuthClient, TokenResponse};
