//! Typed HTTP client for the ShopEasy backend.
//!
//! The client owns transport details only: base URL joining, the request
//! timeout, the bearer token, and decoding response envelopes into domain
//! types. What to do with the results is the shell's business.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::envelope::{Envelope, OrderRequest, ProductPageEnvelope, ProductUpsertRequest};
use crate::error::ApiError;
use shopeasy_commerce::catalog::{CatalogPage, ProductDraft};
use shopeasy_commerce::ids::ProductId;
use shopeasy_commerce::order::OrderDraft;

/// Fallback shown when the server rejects a request without a message.
const GENERIC_FAILURE: &str = "Something went wrong";

/// HTTP client for the ShopEasy backend API.
pub struct ApiClient {
    http: Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bearer_token: None,
        })
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Replace or drop the bearer token.
    pub fn set_token(&mut self, token: Option<String>) {
        self.bearer_token = token;
    }

    /// Fetch one page of the product catalog.
    pub async fn fetch_products(&self, page: i64, limit: i64) -> Result<CatalogPage, ApiError> {
        let url = self.url(&format!("/api/products?page={page}&limit={limit}"));
        debug!("Fetching product page {} (limit {})", page, limit);

        let envelope: ProductPageEnvelope = self.execute(self.http.get(&url)).await?;
        if !envelope.success {
            return Err(envelope_failure(envelope.message));
        }
        Ok(envelope.into_catalog_page())
    }

    /// Submit an order. Returns the server's confirmation message.
    pub async fn create_order(&self, draft: &OrderDraft) -> Result<String, ApiError> {
        let url = self.url("/api/orders");
        debug!("Submitting order with {} line(s)", draft.line_count());

        let request = self.http.post(&url).json(&OrderRequest::from_draft(draft));
        self.send_envelope(request).await
    }

    /// Create a product. Returns the server's confirmation message.
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<String, ApiError> {
        let url = self.url("/api/products");
        debug!("Creating product '{}'", draft.name);

        let request = self
            .http
            .post(&url)
            .json(&ProductUpsertRequest::from_draft(draft));
        self.send_envelope(request).await
    }

    /// Update a product. Returns the server's confirmation message.
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!("/api/products/{id}"));
        debug!("Updating product {}", id);

        let request = self
            .http
            .put(&url)
            .json(&ProductUpsertRequest::from_draft(draft));
        self.send_envelope(request).await
    }

    /// Delete a product. Returns the server's confirmation message.
    pub async fn delete_product(&self, id: ProductId) -> Result<String, ApiError> {
        let url = self.url(&format!("/api/products/{id}"));
        debug!("Deleting product {}", id);

        self.send_envelope(self.http.delete(&url)).await
    }

    /// Join a path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request whose response is a bare envelope.
    async fn send_envelope(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let envelope: Envelope = self.execute(request).await?;
        if envelope.success {
            Ok(envelope.message)
        } else {
            Err(envelope_failure(envelope.message))
        }
    }

    /// Send a request and decode a successful response body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        serde_json::from_slice(body.as_ref()).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout(error.to_string())
    } else {
        ApiError::Transport(error.to_string())
    }
}

/// Map a non-2xx status to an error.
///
/// A 401, or any error body whose message names an expired token, means
/// the session is gone.
fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        return ApiError::SessionExpired;
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: String,
    }

    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        if is_expired_token_message(&parsed.message) {
            return ApiError::SessionExpired;
        }
    }

    let preview = body_preview(body);
    let message = if preview.is_empty() {
        "request failed".to_string()
    } else {
        preview
    };
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Map a `success: false` envelope to an error.
///
/// A message mentioning an expired token means the session is gone; any
/// other message is surfaced verbatim.
fn envelope_failure(message: String) -> ApiError {
    if is_expired_token_message(&message) {
        return ApiError::SessionExpired;
    }
    if message.is_empty() {
        ApiError::Rejected(GENERIC_FAILURE.to_string())
    } else {
        ApiError::Rejected(message)
    }
}

/// An expired-token notice can ride on any error response, not just a 401.
fn is_expired_token_message(message: &str) -> bool {
    message.to_lowercase().contains("token expired")
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
