//! Listing properties and taxonomy properties.

use crate::api::{ApiClient, ApiRequest};
use crate::error::Result;
use reqwest::Response;
use serde::Serialize;

/// Body of [`update_listing_property`].
///
/// `value_ids` and `values` are parallel lists and are sent comma-joined, so
/// a value may not itself contain a comma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateListingPropertyParams {
    pub value_ids: Vec<u64>,
    pub values: Vec<String>,
    pub scale_id: Option<u64>,
}

/// `getListingProperties`
pub fn get_listing_properties(shop_id: u64, listing_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/listings/{listing_id}/properties"
    ))
}

/// `getListingProperty`
pub fn get_listing_property(listing_id: u64, property_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/listings/{listing_id}/properties/{property_id}"
    ))
}

/// `updateListingProperty`
pub fn update_listing_property(
    shop_id: u64,
    listing_id: u64,
    property_id: u64,
    params: &UpdateListingPropertyParams,
) -> Result<ApiRequest> {
    ApiRequest::put(format!(
        "/v3/application/shops/{shop_id}/listings/{listing_id}/properties/{property_id}"
    ))
    .with_form(params)
}

/// `deleteListingProperty`
pub fn delete_listing_property(shop_id: u64, listing_id: u64, property_id: u64) -> ApiRequest {
    ApiRequest::delete(format!(
        "/v3/application/shops/{shop_id}/listings/{listing_id}/properties/{property_id}"
    ))
}

/// `getPropertiesByTaxonomyId`
pub fn get_properties_by_taxonomy_id(taxonomy_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/seller-taxonomy/nodes/{taxonomy_id}/properties"
    ))
}

impl ApiClient {
    /// Lists the property values set on a listing.
    pub async fn get_listing_properties(&self, shop_id: u64, listing_id: u64) -> Result<Response> {
        self.send(get_listing_properties(shop_id, listing_id)).await
    }

    pub async fn get_listing_property(
        &self,
        listing_id: u64,
        property_id: u64,
    ) -> Result<Response> {
        self.send(get_listing_property(listing_id, property_id)).await
    }

    /// Sets the values of a single listing property.
    pub async fn update_listing_property(
        &self,
        shop_id: u64,
        listing_id: u64,
        property_id: u64,
        params: &UpdateListingPropertyParams,
    ) -> Result<Response> {
        self.send(update_listing_property(shop_id, listing_id, property_id, params)?).await
    }

    pub async fn delete_listing_property(
        &self,
        shop_id: u64,
        listing_id: u64,
        property_id: u64,
    ) -> Result<Response> {
        self.send(delete_listing_property(shop_id, listing_id, property_id)).await
    }

    /// Lists the properties a seller taxonomy node supports.
    pub async fn get_properties_by_taxonomy_id(&self, taxonomy_id: u64) -> Result<Response> {
        self.send(get_properties_by_taxonomy_id(taxonomy_id)).await
    }
}
