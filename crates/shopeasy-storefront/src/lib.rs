//! Application shells for the ShopEasy storefront.
//!
//! Two entry points sit on top of the commerce core:
//!
//! - [`Storefront`]: one customer's session (paged catalog, cart,
//!   order submission)
//! - [`AdminConsole`]: the product management table and its mutations
//!
//! Both talk to the server through the [`StoreBackend`] trait, with
//! [`shopeasy_api::ApiClient`] as the production implementation. Tests
//! swap in a scripted backend and drive whole flows without a server.

pub mod admin;
pub mod backend;
pub mod error;
pub mod listing;
pub mod storefront;

pub use admin::{AdminConsole, ADMIN_PAGE_SIZE};
pub use backend::StoreBackend;
pub use error::{AdminError, OrderError};
pub use listing::{FetchTicket, Listing};
pub use storefront::{OrderReceipt, Storefront};
