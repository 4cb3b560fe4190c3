//! HTTP transport for the ShopEasy client.
//!
//! Wraps the backend's REST API in typed calls:
//!
//! - `GET /api/products?page={p}&limit={l}`: paged catalog listing
//! - `POST /api/orders`: order submission
//! - `POST/PUT/DELETE /api/products`: admin product management
//!
//! Every response is a `{ success, message, ... }` envelope; a failed
//! envelope, a bad status, and a dropped connection each map to their own
//! [`ApiError`] variant so callers can treat business rejection
//! differently from transport trouble.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
