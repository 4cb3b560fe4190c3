//! Backend seam between the shells and the transport.

use async_trait::async_trait;

use shopeasy_api::{ApiClient, ApiError};
use shopeasy_commerce::catalog::{CatalogPage, ProductDraft};
use shopeasy_commerce::ids::ProductId;
use shopeasy_commerce::order::OrderDraft;

/// Remote operations the shells depend on.
///
/// [`ApiClient`] is the production implementation; tests substitute a
/// scripted one so flows can run without a server.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Fetch one page of the catalog.
    async fn fetch_products(&self, page: i64, limit: i64) -> Result<CatalogPage, ApiError>;

    /// Submit an order, returning the server's confirmation message.
    async fn submit_order(&self, draft: &OrderDraft) -> Result<String, ApiError>;

    /// Create a product, returning the server's message.
    async fn create_product(&self, draft: &ProductDraft) -> Result<String, ApiError>;

    /// Update an existing product, returning the server's message.
    async fn update_product(&self, id: ProductId, draft: &ProductDraft)
        -> Result<String, ApiError>;

    /// Delete a product, returning the server's message.
    async fn delete_product(&self, id: ProductId) -> Result<String, ApiError>;
}

#[async_trait]
impl StoreBackend for ApiClient {
    async fn fetch_products(&self, page: i64, limit: i64) -> Result<CatalogPage, ApiError> {
        ApiClient::fetch_products(self, page, limit).await
    }

    async fn submit_order(&self, draft: &OrderDraft) -> Result<String, ApiError> {
        self.create_order(draft).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<String, ApiError> {
        ApiClient::create_product(self, draft).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<String, ApiError> {
        ApiClient::update_product(self, id, draft).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<String, ApiError> {
        ApiClient::delete_product(self, id).await
    }
}
