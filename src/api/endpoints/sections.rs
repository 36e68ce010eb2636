//! Shop sections.

use crate::api::{ApiClient, ApiRequest};
use crate::error::Result;
use reqwest::Response;
use serde::Serialize;

#[derive(Serialize)]
struct SectionTitle<'a> {
    title: &'a str,
}

/// `createShopSection`
pub fn create_shop_section(shop_id: u64, title: &str) -> Result<ApiRequest> {
    ApiRequest::post(format!("/v3/application/shops/{shop_id}/sections"))
        .with_form(&SectionTitle { title })
}

/// `getShopSections`
pub fn get_shop_sections(shop_id: u64) -> ApiRequest {
    ApiRequest::get(format!("/v3/application/shops/{shop_id}/sections"))
}

/// `getShopSection`
pub fn get_shop_section(shop_id: u64, shop_section_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/sections/{shop_section_id}"
    ))
}

/// `updateShopSection`
pub fn update_shop_section(shop_id: u64, shop_section_id: u64, title: &str) -> Result<ApiRequest> {
    ApiRequest::put(format!(
        "/v3/application/shops/{shop_id}/sections/{shop_section_id}"
    ))
    .with_form(&SectionTitle { title })
}

/// `deleteShopSection`
pub fn delete_shop_section(shop_id: u64, shop_section_id: u64) -> ApiRequest {
    ApiRequest::delete(format!(
        "/v3/application/shops/{shop_id}/sections/{shop_section_id}"
    ))
}

impl ApiClient {
    /// Creates a new section in a shop.
    pub async fn create_shop_section(&self, shop_id: u64, title: &str) -> Result<Response> {
        self.send(create_shop_section(shop_id, title)?).await
    }

    pub async fn get_shop_sections(&self, shop_id: u64) -> Result<Response> {
        self.send(get_shop_sections(shop_id)).await
    }

    pub async fn get_shop_section(&self, shop_id: u64, shop_section_id: u64) -> Result<Response> {
        self.send(get_shop_section(shop_id, shop_section_id)).await
    }

    /// Renames a shop section.
    pub async fn update_shop_section(
        &self,
        shop_id: u64,
        shop_section_id: u64,
        title: &str,
    ) -> Result<Response> {
        self.send(update_shop_section(shop_id, shop_section_id, title)?).await
    }

    pub async fn delete_shop_section(
        &self,
        shop_id: u64,
        shop_section_id: u64,
    ) -> Result<Response> {
        self.send(delete_shop_section(shop_id, shop_section_id)).await
    }
}
