//! Session handling for the ShopEasy client.
//!
//! Covers the three things a page session needs from auth:
//!
//! - **User**: the identity parsed from stored session material
//! - **Session**: an explicit context with a refresh/invalidate lifecycle
//! - **Guard**: the customer/admin route access policy
//!
//! Login itself happens elsewhere; this crate only consumes the token and
//! user record a login left behind.

pub mod guard;
pub mod session;
pub mod user;

pub use guard::{check_route, RouteAccess, RouteKind};
pub use session::SessionContext;
pub use user::{AuthUser, Role};
