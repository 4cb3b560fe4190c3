//! Client-side commerce domain for the ShopEasy storefront.
//!
//! This crate provides the pure state that the storefront shell drives:
//!
//! - **Catalog**: products as fetched, one page at a time
//! - **Cart**: line items guarded by the last-known stock ceiling
//! - **Pager**: 1-indexed pagination state
//! - **Order**: submission payloads built from the cart
//!
//! Nothing here performs I/O; fetching and submission live in the
//! `shopeasy-api` and `shopeasy-storefront` crates.
//!
//! # Example
//!
//! ```
//! use shopeasy_commerce::prelude::*;
//!
//! let laptop = Product::new(ProductId::new(1), "Laptop", Money::from_rupees(49999.0), 3);
//!
//! let mut cart = Cart::new();
//! cart.add(&laptop)?;
//! cart.add(&laptop)?;
//!
//! assert_eq!(cart.total(), Money::from_rupees(99998.0));
//! # Ok::<(), CartRejection>(())
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod pager;

pub use error::{CartRejection, DraftError};
pub use ids::{ProductId, UserId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartRejection, DraftError};
    pub use crate::ids::{ProductId, UserId};
    pub use crate::money::Money;

    pub use crate::cart::{Cart, CartItem};
    pub use crate::catalog::{CatalogPage, Product, ProductDraft};
    pub use crate::order::{OrderDraft, OrderLine};
    pub use crate::pager::{Pager, DEFAULT_PAGE_SIZE};
}
