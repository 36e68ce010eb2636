//! Receipt transactions.

use crate::api::params::Page;
use crate::api::{ApiClient, ApiRequest};
use crate::error::Result;
use reqwest::Response;

/// `getShopReceiptTransactionsByListing`
pub fn get_shop_receipt_transactions_by_listing(
    shop_id: u64,
    listing_id: u64,
    page: &Page,
) -> Result<ApiRequest> {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/listings/{listing_id}/transactions"
    ))
    .with_query(page)
}

/// `getShopReceiptTransactionsByReceipt`
pub fn get_shop_receipt_transactions_by_receipt(shop_id: u64, receipt_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/receipts/{receipt_id}/transactions"
    ))
}

/// `getShopReceiptTransaction`
pub fn get_shop_receipt_transaction(shop_id: u64, transaction_id: u64) -> ApiRequest {
    ApiRequest::get(format!(
        "/v3/application/shops/{shop_id}/transactions/{transaction_id}"
    ))
}

/// `getShopReceiptTransactionsByShop`
pub fn get_shop_receipt_transactions_by_shop(shop_id: u64, page: &Page) -> Result<ApiRequest> {
    ApiRequest::get(format!("/v3/application/shops/{shop_id}/transactions")).with_query(page)
}

impl ApiClient {
    /// Retrieves the transactions recorded for a listing.
    pub async fn get_shop_receipt_transactions_by_listing(
        &self,
        shop_id: u64,
        listing_id: u64,
        page: &Page,
    ) -> Result<Response> {
        self.send(get_shop_receipt_transactions_by_listing(shop_id, listing_id, page)?).await
    }

    /// Retrieves the transactions on a receipt.
    pub async fn get_shop_receipt_transactions_by_receipt(
        &self,
        shop_id: u64,
        receipt_id: u64,
    ) -> Result<Response> {
        self.send(get_shop_receipt_transactions_by_receipt(shop_id, receipt_id)).await
    }

    /// Retrieves a single transaction.
    pub async fn get_shop_receipt_transaction(
        &self,
        shop_id: u64,
        transaction_id: u64,
    ) -> Result<Response> {
        self.send(get_shop_receipt_transaction(shop_id, transaction_id)).await
    }

    /// Retrieves all transactions of a shop.
    pub async fn get_shop_receipt_transactions_by_shop(
        &self,
        shop_id: u64,
        page: &Page,
    ) -> Result<Response> {
        self.send(get_shop_receipt_transactions_by_shop(shop_id, page)?).await
    }
}
