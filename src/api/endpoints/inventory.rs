//! Listing inventory, products and offerings.

use crate::api::{ApiClient, ApiRequest};
use crate::error::Result;
use reqwest::Response;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Associations embeddable in inventory responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryInclude {
    Listing,
}

/// Options for [`get_listing_inventory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetListingInventoryParams {
    /// Include deleted products and offerings.
    pub show_deleted: Option<bool>,
    pub includes: Option<Vec<InventoryInclude>>,
}

/// Full replacement inventory for [`update_listing_inventory`].
///
/// Every field is always serialized; the API rejects a body missing any of
/// the four arrays, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingInventoryUpdate {
    pub products: Vec<ProductUpdate>,
    /// Property ids whose values carry distinct prices.
    pub price_on_property: Vec<u64>,
    pub quantity_on_property: Vec<u64>,
    pub sku_on_property: Vec<u64>,
}

/// One product (variation combination) of a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub sku: String,
    pub property_values: Vec<PropertyValueUpdate>,
    pub offerings: Vec<OfferingUpdate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValueUpdate {
    pub property_id: u64,
    pub value_ids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    pub values: Vec<String>,
}

/// Price and stock for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingUpdate {
    /// Sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub is_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_state_id: Option<u64>,
}

impl OfferingUpdate {
    /// An enabled offering.
    pub fn new(price: Decimal, quantity: u32) -> Self {
        Self {
            price,
            quantity,
            is_enabled: true,
            readiness_state_id: None,
        }
    }
}

/// `getListingInventory`
pub fn get_listing_inventory(
    listing_id: u64,
    params: &GetListingInventoryParams,
) -> Result<ApiRequest> {
    ApiRequest::get(format!("/v3/application/listings/{listing_id}/inventory")).with_query(params)
}

/// `updateListingInventory`
pub fn update_listing_inventory(
    listing_id: u64,
    inventory: &ListingInventoryUpdate,
) -> Result<ApiRequest> {
    ApiRequest::put(format!("/v3/application/listings/{listing_id}/inventory")).with_json(inventory)
}

/// `getListingProduct`
pub fn get_listing_product(listing_id: u64, product_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/listings/{listing_id}/inventory/products/{product_id}"
    ))
}

/// `getListingOffering`
pub fn get_listing_offering(listing_id: u64, product_id: u64, offering_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/listings/{listing_id}/products/{product_id}/offerings/{offering_id}"
    ))
}

impl ApiClient {
    pub async fn get_listing_inventory(
        &self,
        listing_id: u64,
        params: &GetListingInventoryParams,
    ) -> Result<Response> {
        self.send(get_listing_inventory(listing_id, params)?).await
    }

    /// Replaces the whole inventory of a listing.
    pub async fn update_listing_inventory(
        &self,
        listing_id: u64,
        inventory: &ListingInventoryUpdate,
    ) -> Result<Response> {
        self.send(update_listing_inventory(listing_id, inventory)?).await
    }

    pub async fn get_listing_product(&self, listing_id: u64, product_id: u64) -> Result<Response> {
        self.send(get_listing_product(listing_id, product_id)).await
    }

    pub async fn get_listing_offering(
        &self,
        listing_id: u64,
        product_id: u64,
        offering_id: u64,
    ) -> Result<Response> {
        self.send(get_listing_offering(listing_id, product_id, offering_id)).await
    }
}
