//! Error types for the shell flows.

use thiserror::Error;

use shopeasy_api::ApiError;
use shopeasy_commerce::error::DraftError;

/// Failures of the order submission flow.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Nothing in the cart; no request was made.
    #[error("Cart is empty")]
    EmptyCart,

    /// The server processed the request and declined it. The cart is kept.
    #[error("{0}")]
    Rejected(String),

    /// The exchange itself failed. The cart is kept.
    #[error(transparent)]
    Api(ApiError),
}

impl OrderError {
    pub(crate) fn from_api(error: ApiError) -> Self {
        match error {
            ApiError::Rejected(message) => OrderError::Rejected(message),
            other => OrderError::Api(other),
        }
    }
}

/// Failures of the admin product operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The draft is not submittable.
    #[error(transparent)]
    Invalid(#[from] DraftError),

    /// The server processed the request and declined it.
    #[error("{0}")]
    Rejected(String),

    /// The exchange itself failed.
    #[error(transparent)]
    Api(ApiError),
}

impl AdminError {
    pub(crate) fn from_api(error: ApiError) -> Self {
        match error {
            ApiError::Rejected(message) => AdminError::Rejected(message),
            other => AdminError::Api(other),
        }
    }
}
