//! Commerce error types.

use thiserror::Error;

/// Reasons a cart mutation is refused.
///
/// A refused mutation leaves the cart exactly as it was; nothing is
/// clamped or partially applied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartRejection {
    /// Product has no stock at all.
    #[error("Out of stock")]
    OutOfStock,

    /// Requested quantity exceeds the last-known stock.
    #[error("Only {available} items available in stock")]
    StockLimit {
        /// Stock level the request was checked against.
        available: i64,
    },
}

/// Validation failures for a product draft.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// A required field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Price must not be negative.
    #[error("Price cannot be negative")]
    NegativePrice,

    /// Stock count must not be negative.
    #[error("Stock count cannot be negative")]
    NegativeStock,
}
