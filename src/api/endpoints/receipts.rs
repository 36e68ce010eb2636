//! Shop receipts.

use crate::api::params::SortOrder;
use crate::api::{ApiClient, ApiRequest};
use crate::error::Result;
use reqwest::Response;
use serde::{Deserialize, Serialize};

/// Sort key for receipt listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptSortOn {
    Created,
    Updated,
    ReceiptId,
}

/// Filters for [`get_shop_receipts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetShopReceiptsParams {
    /// Earliest creation time, epoch seconds.
    pub min_created: Option<i64>,
    /// Latest creation time, epoch seconds.
    pub max_created: Option<i64>,
    pub min_last_modified: Option<i64>,
    pub max_last_modified: Option<i64>,
    /// 1-100, API default 25.
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub sort_on: Option<ReceiptSortOn>,
    pub sort_order: Option<SortOrder>,
    pub was_paid: Option<bool>,
    pub was_shipped: Option<bool>,
    pub was_delivered: Option<bool>,
    pub was_canceled: Option<bool>,
}

/// Status changes for [`update_shop_receipt`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UpdateShopReceiptParams {
    /// Mark the receipt as shipped.
    pub was_shipped: Option<bool>,
    /// Mark the receipt as paid.
    pub was_paid: Option<bool>,
}

/// Tracking details for [`create_receipt_shipment`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateReceiptShipmentParams {
    pub tracking_code: Option<String>,
    pub carrier_name: Option<String>,
    /// Send a copy of the shipping notification to the seller.
    pub send_bcc: Option<bool>,
    pub note_to_buyer: Option<String>,
}

/// `getShopReceipt`
pub fn get_shop_receipt(shop_id: u64, receipt_id: u64) -> ApiRequest {
    ApiRequest::get(format!("/v3/application/shops/{shop_id}/receipts/{receipt_id}"))
}

/// `updateShopReceipt`
pub fn update_shop_receipt(
    shop_id: u64,
    receipt_id: u64,
    params: &UpdateShopReceiptParams,
) -> Result<ApiRequest> {
    ApiRequest::put(format!("/v3/application/shops/{shop_id}/receipts/{receipt_id}"))
        .with_form(params)
}

/// `getShopReceipts`
pub fn get_shop_receipts(shop_id: u64, params: &GetShopReceiptsParams) -> Result<ApiRequest> {
    ApiRequest::get(format!("/v3/application/shops/{shop_id}/receipts")).with_query(params)
}

/// `createReceiptShipment`
pub fn create_receipt_shipment(
    shop_id: u64,
    receipt_id: u64,
    params: &CreateReceiptShipmentParams,
) -> Result<ApiRequest> {
    ApiRequest::post(format!(
        "/v3/application/shops/{shop_id}/receipts/{receipt_id}/tracking"
    ))
    .with_form(params)
}

impl ApiClient {
    /// Retrieves a receipt, identified by a receipt id, from an Etsy shop.
    pub async fn get_shop_receipt(&self, shop_id: u64, receipt_id: u64) -> Result<Response> {
        self.send(get_shop_receipt(shop_id, receipt_id)).await
    }

    /// Updates the shipped/paid status of a receipt.
    pub async fn update_shop_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
        params: &UpdateShopReceiptParams,
    ) -> Result<Response> {
        self.send(update_shop_receipt(shop_id, receipt_id, params)?).await
    }

    /// Requests the receipts of a shop, filtered by `params`.
    pub async fn get_shop_receipts(
        &self,
        shop_id: u64,
        params: &GetShopReceiptsParams,
    ) -> Result<Response> {
        self.send(get_shop_receipts(shop_id, params)?).await
    }

    /// Submits tracking information for a receipt and marks it shipped.
    pub async fn create_receipt_shipment(
        &self,
        shop_id: u64,
        receipt_id: u64,
        params: &CreateReceiptShipmentParams,
    ) -> Result<Response> {
        self.send(create_receipt_shipment(shop_id, receipt_id, params)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthMode;
    use pretty_assertions::assert_eq;
    use reqwest::Method;

    #[test]
    fn test_get_shop_receipt() {
        let req = get_shop_receipt(111, 222);
        assert_eq!(req.method(), &Method::GET);
        assert_eq!(req.path(), "/v3/application/shops/111/receipts/222");
        assert_eq!(req.auth(), AuthMode::Token);
        assert!(req.query().is_empty());
    }

    #[test]
    fn test_get_shop_receipts_sends_only_given_params() {
        let params = GetShopReceiptsParams {
            limit: Some(10),
            offset: Some(5),
            ..Default::default()
        };
        let req = get_shop_receipts(111, &params).unwrap();

        assert_eq!(req.path(), "/v3/application/shops/111/receipts");
        let mut query = req.query().to_vec();
        query.sort();
        assert_eq!(
            query,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_get_shop_receipts_filters() {
        let params = GetShopReceiptsParams {
            min_created: Some(1_700_000_000),
            sort_on: Some(ReceiptSortOn::ReceiptId),
            sort_order: Some(SortOrder::Ascending),
            was_paid: Some(true),
            was_canceled: Some(false),
            ..Default::default()
        };
        let req = get_shop_receipts(7, &params).unwrap();

        assert_eq!(req.param("min_created"), Some("1700000000"));
        assert_eq!(req.param("sort_on"), Some("receipt_id"));
        assert_eq!(req.param("sort_order"), Some("ascending"));
        assert_eq!(req.param("was_paid"), Some("true"));
        assert_eq!(req.param("was_canceled"), Some("false"));
        assert_eq!(req.param("limit"), None);
        assert_eq!(req.query().len(), 5);
    }

    #[test]
    fn test_update_shop_receipt() {
        let params = UpdateShopReceiptParams {
            was_shipped: Some(true),
            was_paid: None,
        };
        let req = update_shop_receipt(111, 222, &params).unwrap();

        assert_eq!(req.method(), &Method::PUT);
        assert_eq!(req.path(), "/v3/application/shops/111/receipts/222");
        assert!(req.query().is_empty());
        assert_eq!(req.param("was_shipped"), Some("true"));
        assert_eq!(req.param_names(), vec!["was_shipped"]);
    }

    #[test]
    fn test_create_receipt_shipment() {
        let params = CreateReceiptShipmentParams {
            tracking_code: Some("1Z999".to_string()),
            carrier_name: Some("ups".to_string()),
            send_bcc: Some(true),
            note_to_buyer: None,
        };
        let req = create_receipt_shipment(111, 222, &params).unwrap();

        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.path(), "/v3/application/shops/111/receipts/222/tracking");
        assert_eq!(req.param("tracking_code"), Some("1Z999"));
        assert_eq!(req.param("carrier_name"), Some("ups"));
        assert_eq!(req.param("send_bcc"), Some("true"));
        assert_eq!(req.param("note_to_buyer"), None);
    }
}
