//! Etsy Open API v3 operations.
//!
//! Every operation comes in two forms: a free function that builds the
//! [`ApiRequest`](super::ApiRequest) (useful for inspection and dry runs) and
//! an async method of the same name on [`ApiClient`](super::ApiClient) that
//! sends it. Read operations carry parameters in the query string, writes in
//! a form body; `update_listing_inventory` is the only JSON call.

pub mod inventory;
pub mod listings;
pub mod properties;
pub mod receipts;
pub mod sections;
pub mod transactions;
