//! Customer storefront shell.
//!
//! Owns the session, the paged catalog and the cart, and drives the
//! backend. The commerce rules themselves live in `shopeasy-commerce`;
//! this type is the side-effecting layer that strings them together.

use tracing::{debug, info, warn};

use crate::backend::StoreBackend;
use crate::error::OrderError;
use crate::listing::{FetchTicket, Listing};
use shopeasy_api::ApiError;
use shopeasy_auth::SessionContext;
use shopeasy_commerce::cart::Cart;
use shopeasy_commerce::catalog::{CatalogPage, Product};
use shopeasy_commerce::error::CartRejection;
use shopeasy_commerce::ids::ProductId;
use shopeasy_commerce::money::Money;
use shopeasy_commerce::order::OrderDraft;
use shopeasy_commerce::pager::Pager;

/// Confirmation for a successfully placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Server confirmation message.
    pub message: String,
}

/// One customer's storefront session.
pub struct Storefront<B> {
    backend: B,
    session: SessionContext,
    listing: Listing,
    cart: Cart,
}

impl<B: StoreBackend> Storefront<B> {
    /// Shell over a backend, starting on page one with the default size.
    pub fn new(backend: B, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            listing: Listing::new(Pager::new()),
            cart: Cart::new(),
        }
    }

    /// Shell with a specific starting page size.
    pub fn with_page_size(backend: B, session: SessionContext, page_size: i64) -> Self {
        Self {
            backend,
            session,
            listing: Listing::new(Pager::with_page_size(page_size)),
            cart: Cart::new(),
        }
    }

    /// The backend this shell drives.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current session.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Replace the session, e.g. after a login elsewhere.
    pub fn set_session(&mut self, session: SessionContext) {
        self.session = session;
    }

    /// Products on the current page.
    pub fn catalog(&self) -> &[Product] {
        self.listing.products()
    }

    /// Pagination state.
    pub fn pager(&self) -> &Pager {
        self.listing.pager()
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Total across all cart lines at snapshotted unit prices.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Start a fetch for the current page; pair with [`apply_catalog`].
    ///
    /// Split from the request itself so callers driving requests
    /// concurrently can let responses race and still end up with the
    /// data of the fetch issued last.
    ///
    /// [`apply_catalog`]: Storefront::apply_catalog
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.listing.begin_fetch()
    }

    /// Apply a fetched page if its ticket is still current.
    ///
    /// On apply, cart lines learn the stock levels carried by the page.
    /// Returns false for a stale ticket.
    pub fn apply_catalog(&mut self, ticket: &FetchTicket, page: CatalogPage) -> bool {
        if !self.listing.apply(ticket, page) {
            return false;
        }
        self.cart.refresh_stock(self.listing.products());
        true
    }

    /// Fetch and apply the current page.
    ///
    /// A session-expired answer invalidates the session before the
    /// error is returned.
    pub async fn refresh_catalog(&mut self) -> Result<(), ApiError> {
        let ticket = self.begin_fetch();
        debug!("Fetching catalog page {} (limit {})", ticket.page(), ticket.limit());
        match self.backend.fetch_products(ticket.page(), ticket.limit()).await {
            Ok(page) => {
                self.apply_catalog(&ticket, page);
                Ok(())
            }
            Err(error) => {
                self.handle_session_expiry(&error);
                Err(error)
            }
        }
    }

    /// Move to another page (optionally changing the page size), then
    /// refetch.
    ///
    /// The page number is taken verbatim; whether it exists is for the
    /// server to answer. Besides an explicit [`refresh_catalog`] call
    /// this is the only trigger for a catalog fetch.
    ///
    /// [`refresh_catalog`]: Storefront::refresh_catalog
    pub async fn set_page(&mut self, page: i64, page_size: Option<i64>) -> Result<(), ApiError> {
        self.listing.pager_mut().set_page(page, page_size);
        self.refresh_catalog().await
    }

    /// Add one unit of a product to the cart.
    ///
    /// Returns the line's new quantity, or a rejection that leaves the
    /// cart untouched.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<i64, CartRejection> {
        self.cart.add(product)
    }

    /// Set a cart line's quantity directly.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CartRejection> {
        self.cart.set_quantity(product_id, quantity)
    }

    /// Remove a cart line. Returns false if the product was not in the
    /// cart.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Submit the cart as an order.
    ///
    /// An empty cart short-circuits without touching the backend.
    /// Exactly one request goes out and it is never retried. On success
    /// the cart is cleared and the current page refetched (a refetch
    /// failure is logged, not surfaced). On any failure the cart stays
    /// exactly as it was.
    pub async fn place_order(&mut self) -> Result<OrderReceipt, OrderError> {
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let draft = OrderDraft::from_cart(&self.cart, self.session.user_id());
        debug!("Submitting order with {} line(s)", draft.line_count());

        match self.backend.submit_order(&draft).await {
            Ok(message) => {
                info!("Order accepted: {}", message);
                self.cart.clear();
                if let Err(error) = self.refresh_catalog().await {
                    warn!("Catalog refresh after order failed: {}", error);
                }
                Ok(OrderReceipt { message })
            }
            Err(error) => {
                self.handle_session_expiry(&error);
                Err(OrderError::from_api(error))
            }
        }
    }

    fn handle_session_expiry(&mut self, error: &ApiError) {
        if error.is_session_expired() {
            warn!("Session expired; dropping stored credentials");
            self.session.invalidate();
        }
    }
}
