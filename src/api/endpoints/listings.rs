//! Shop listings.
//!
//! Listing creation and updates share a large set of optional attributes,
//! collected in [`ListingDetails`] and flattened into both form bodies.

use crate::api::params::{Page, SortOrder};
use crate::api::{ApiClient, ApiRequest};
use crate::error::Result;
use reqwest::Response;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingState {
    Active,
    Inactive,
    SoldOut,
    Draft,
    Expired,
}

/// Sort key for listing collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSortOn {
    Created,
    Price,
    Updated,
    Title,
    Score,
}

/// Associations the API can embed in listing responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingInclude {
    Shipping,
    Images,
    Shop,
    User,
    Translations,
    Inventory,
    Videos,
}

/// Who made the item being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhoMade {
    #[serde(rename = "i_did")]
    IDid,
    #[serde(rename = "someone_else")]
    SomeoneElse,
    #[serde(rename = "collective")]
    Collective,
}

/// Era in which the item was made.
///
/// The API periodically shifts its date buckets; values not covered by a
/// named variant can be passed through [`WhenMade::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhenMade {
    #[serde(rename = "made_to_order")]
    MadeToOrder,
    #[serde(rename = "2020_2025")]
    From2020To2025,
    #[serde(rename = "2010_2019")]
    From2010To2019,
    #[serde(rename = "2006_2009")]
    From2006To2009,
    #[serde(rename = "before_2006")]
    Before2006,
    #[serde(rename = "before_1700")]
    Before1700,
    #[serde(untagged)]
    Other(String),
}

/// Physical or digital listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Physical,
    Download,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Oz,
    Lb,
    G,
    Kg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionsUnit {
    In,
    Ft,
    Mm,
    Cm,
    M,
    Yd,
    Inches,
}

/// Optional listing attributes accepted by both create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingDetails {
    pub shipping_profile_id: Option<u64>,
    pub return_policy_id: Option<u64>,
    pub materials: Option<Vec<String>>,
    pub shop_section_id: Option<u64>,
    pub processing_min: Option<u32>,
    pub processing_max: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    pub item_weight: Option<Decimal>,
    pub item_length: Option<Decimal>,
    pub item_width: Option<Decimal>,
    pub item_height: Option<Decimal>,
    pub item_weight_unit: Option<WeightUnit>,
    pub item_dimensions_unit: Option<DimensionsUnit>,
    pub is_personalizable: Option<bool>,
    pub personalization_is_required: Option<bool>,
    pub personalization_char_count_max: Option<u32>,
    pub personalization_instructions: Option<String>,
    pub production_partner_ids: Option<Vec<u64>>,
    pub image_ids: Option<Vec<u64>>,
    pub is_supply: Option<bool>,
    pub is_customizable: Option<bool>,
    pub should_auto_renew: Option<bool>,
    pub is_taxable: Option<bool>,
    #[serde(rename = "type")]
    pub listing_type: Option<ListingType>,
}

/// Body of [`create_draft_listing`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDraftListingParams {
    pub quantity: u32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub who_made: WhoMade,
    pub when_made: WhenMade,
    pub taxonomy_id: u64,
    #[serde(flatten)]
    pub details: ListingDetails,
}

impl CreateDraftListingParams {
    /// Required fields only; optional attributes go through `details`.
    pub fn new(
        quantity: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        who_made: WhoMade,
        when_made: WhenMade,
        taxonomy_id: u64,
    ) -> Self {
        Self {
            quantity,
            title: title.into(),
            description: description.into(),
            price,
            who_made,
            when_made,
            taxonomy_id,
            details: ListingDetails::default(),
        }
    }
}

/// Body of [`update_listing`]. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateListingParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub who_made: Option<WhoMade>,
    pub when_made: Option<WhenMade>,
    pub taxonomy_id: Option<u64>,
    pub featured_rank: Option<i32>,
    /// Only `active` and `inactive` are accepted here.
    pub state: Option<ListingState>,
    #[serde(flatten)]
    pub details: ListingDetails,
}

/// Filters for [`get_listings_by_shop`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetListingsByShopParams {
    pub state: Option<ListingState>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_on: Option<ListingSortOn>,
    pub sort_order: Option<SortOrder>,
    pub includes: Option<Vec<ListingInclude>>,
}

/// Options for [`get_listing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetListingParams {
    pub includes: Option<Vec<ListingInclude>>,
    /// IETF language tag for translated fields.
    pub language: Option<String>,
}

/// Search filters for [`find_all_listings_active`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindAllListingsActiveParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub keywords: Option<String>,
    pub sort_on: Option<ListingSortOn>,
    pub sort_order: Option<SortOrder>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub taxonomy_id: Option<u64>,
    pub shop_location: Option<String>,
}

/// Filters for [`find_all_active_listings_by_shop`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FindAllActiveListingsByShopParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_on: Option<ListingSortOn>,
    pub sort_order: Option<SortOrder>,
    pub keywords: Option<String>,
}

/// Filters for [`get_listings_by_shop_section_id`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetListingsByShopSectionIdParams {
    pub shop_section_ids: Vec<u64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_on: Option<ListingSortOn>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Serialize)]
struct ListingIdsQuery<'a> {
    listing_ids: &'a [u64],
    includes: Option<&'a [ListingInclude]>,
}

/// `createDraftListing`
pub fn create_draft_listing(shop_id: u64, params: &CreateDraftListingParams) -> Result<ApiRequest> {
    ApiRequest::post(format!("/v3/application/shops/{shop_id}/listings")).with_form(params)
}

/// `getListingsByShop`
pub fn get_listings_by_shop(shop_id: u64, params: &GetListingsByShopParams) -> Result<ApiRequest> {
    ApiRequest::get(format!("/v3/application/shops/{shop_id}/listings")).with_query(params)
}

/// `deleteListing`
pub fn delete_listing(listing_id: u64) -> ApiRequest {
    ApiRequest::delete(format!("/v3/application/listings/{listing_id}"))
}

/// `getListing`
pub fn get_listing(listing_id: u64, params: &GetListingParams) -> Result<ApiRequest> {
    ApiRequest::get(format!("/v3/application/listings/{listing_id}")).with_query(params)
}

/// `findAllListingsActive`
pub fn find_all_listings_active(params: &FindAllListingsActiveParams) -> Result<ApiRequest> {
    ApiRequest::get("/v3/application/listings/active").with_query(params)
}

/// `findAllActiveListingsByShop`
pub fn find_all_active_listings_by_shop(
    shop_id: u64,
    params: &FindAllActiveListingsByShopParams,
) -> Result<ApiRequest> {
    ApiRequest::get(format!("/v3/application/shops/{shop_id}/listings/active")).with_query(params)
}

/// `getListingsByListingIds`
pub fn get_listings_by_listing_ids(
    listing_ids: &[u64],
    includes: &[ListingInclude],
) -> Result<ApiRequest> {
    ApiRequest::get("/v3/application/listings/batch").with_query(&ListingIdsQuery {
        listing_ids,
        includes: (!includes.is_empty()).then_some(includes),
    })
}

/// `getFeaturedListingsByShop`
pub fn get_featured_listings_by_shop(shop_id: u64, page: &Page) -> Result<ApiRequest> {
    ApiRequest::get(format!("/v3/application/shops/{shop_id}/listings/featured")).with_query(page)
}

/// `updateListing`
pub fn update_listing(
    shop_id: u64,
    listing_id: u64,
    params: &UpdateListingParams,
) -> Result<ApiRequest> {
    ApiRequest::patch(format!(
        "/v3/application/shops/{shop_id}/listings/{listing_id}"
    ))
    .with_form(params)
}

/// `getListingsByShopReceipt`
pub fn get_listings_by_shop_receipt(
    shop_id: u64,
    receipt_id: u64,
    page: &Page,
) -> Result<ApiRequest> {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/receipts/{receipt_id}/listings"
    ))
    .with_query(page)
}

/// `getListingsByShopReturnPolicy`
pub fn get_listings_by_shop_return_policy(shop_id: u64, return_policy_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/policies/return/{return_policy_id}/listings"
    ))
}

/// `getListingsByShopSectionId`
pub fn get_listings_by_shop_section_id(
    shop_id: u64,
    params: &GetListingsByShopSectionIdParams,
) -> Result<ApiRequest> {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/shop-sections/listings"
    ))
    .with_query(params)
}

impl ApiClient {
    /// Creates a physical draft listing in a shop.
    pub async fn create_draft_listing(
        &self,
        shop_id: u64,
        params: &CreateDraftListingParams,
    ) -> Result<Response> {
        self.send(create_draft_listing(shop_id, params)?).await
    }

    /// Lists a shop's listings in any state.
    pub async fn get_listings_by_shop(
        &self,
        shop_id: u64,
        params: &GetListingsByShopParams,
    ) -> Result<Response> {
        self.send(get_listings_by_shop(shop_id, params)?).await
    }

    /// Deletes a listing.
    pub async fn delete_listing(&self, listing_id: u64) -> Result<Response> {
        self.send(delete_listing(listing_id)).await
    }

    pub async fn get_listing(
        &self,
        listing_id: u64,
        params: &GetListingParams,
    ) -> Result<Response> {
        self.send(get_listing(listing_id, params)?).await
    }

    /// Searches active listings across all of Etsy.
    pub async fn find_all_listings_active(
        &self,
        params: &FindAllListingsActiveParams,
    ) -> Result<Response> {
        self.send(find_all_listings_active(params)?).await
    }

    /// Lists the active listings of a single shop.
    pub async fn find_all_active_listings_by_shop(
        &self,
        shop_id: u64,
        params: &FindAllActiveListingsByShopParams,
    ) -> Result<Response> {
        self.send(find_all_active_listings_by_shop(shop_id, params)?).await
    }

    /// Fetches up to 100 listings by id in one call.
    pub async fn get_listings_by_listing_ids(
        &self,
        listing_ids: &[u64],
        includes: &[ListingInclude],
    ) -> Result<Response> {
        self.send(get_listings_by_listing_ids(listing_ids, includes)?).await
    }

    pub async fn get_featured_listings_by_shop(
        &self,
        shop_id: u64,
        page: &Page,
    ) -> Result<Response> {
        self.send(get_featured_listings_by_shop(shop_id, page)?).await
    }

    /// Updates the given attributes of a listing.
    pub async fn update_listing(
        &self,
        shop_id: u64,
        listing_id: u64,
        params: &UpdateListingParams,
    ) -> Result<Response> {
        self.send(update_listing(shop_id, listing_id, params)?).await
    }

    /// Lists the listings purchased on a receipt.
    pub async fn get_listings_by_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
        page: &Page,
    ) -> Result<Response> {
        self.send(get_listings_by_shop_receipt(shop_id, receipt_id, page)?).await
    }

    /// Lists the listings bound to a return policy.
    pub async fn get_listings_by_shop_return_policy(
        &self,
        shop_id: u64,
        return_policy_id: u64,
    ) -> Result<Response> {
        self.send(get_listings_by_shop_return_policy(shop_id, return_policy_id)).await
    }

    /// Lists the listings in one or more shop sections.
    pub async fn get_listings_by_shop_section_id(
        &self,
        shop_id: u64,
        params: &GetListingsByShopSectionIdParams,
    ) -> Result<Response> {
        self.send(get_listings_by_shop_section_id(shop_id, params)?).await
    }
}
