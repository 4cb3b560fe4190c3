//! Admin product console.
//!
//! The same ticketed listing as the customer shell, plus the product
//! mutations. No cart here; the admin view is a management table.

use tracing::{info, warn};

use crate::backend::StoreBackend;
use crate::error::AdminError;
use crate::listing::Listing;
use shopeasy_api::ApiError;
use shopeasy_auth::SessionContext;
use shopeasy_commerce::catalog::{Product, ProductDraft};
use shopeasy_commerce::ids::ProductId;
use shopeasy_commerce::pager::Pager;

/// Default page size for the admin product table.
pub const ADMIN_PAGE_SIZE: i64 = 5;

/// Admin console state over the product table.
pub struct AdminConsole<B> {
    backend: B,
    session: SessionContext,
    listing: Listing,
}

impl<B: StoreBackend> AdminConsole<B> {
    /// Console over a backend, starting on page one.
    pub fn new(backend: B, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            listing: Listing::new(Pager::with_page_size(ADMIN_PAGE_SIZE)),
        }
    }

    /// The backend this console drives.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Current session.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Products on the current page.
    pub fn products(&self) -> &[Product] {
        self.listing.products()
    }

    /// Pagination state.
    pub fn pager(&self) -> &Pager {
        self.listing.pager()
    }

    /// Fetch and apply the current page.
    ///
    /// Unlike the customer listing, the admin table adopts the page
    /// size the server echoes back, so a server-side limit change shows
    /// up after the next refresh.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let ticket = self.listing.begin_fetch();
        match self.backend.fetch_products(ticket.page(), ticket.limit()).await {
            Ok(page) => {
                let echoed_limit = page.limit;
                if self.listing.apply(&ticket, page) && echoed_limit > 0 {
                    self.listing.pager_mut().sync_page_size(echoed_limit);
                }
                Ok(())
            }
            Err(error) => {
                self.handle_session_expiry(&error);
                Err(error)
            }
        }
    }

    /// Move to another page, then refetch.
    pub async fn set_page(&mut self, page: i64, page_size: Option<i64>) -> Result<(), ApiError> {
        self.listing.pager_mut().set_page(page, page_size);
        self.refresh().await
    }

    /// Create or update a product from a draft.
    ///
    /// `editing` selects the branch: a product ID means update, none
    /// means create. The draft is validated before anything goes out.
    /// After a successful save the listing refreshes; a refresh failure
    /// is logged, not surfaced.
    pub async fn save(
        &mut self,
        editing: Option<ProductId>,
        draft: &ProductDraft,
    ) -> Result<String, AdminError> {
        draft.validate()?;

        let result = match editing {
            Some(id) => self.backend.update_product(id, draft).await,
            None => self.backend.create_product(draft).await,
        };

        match result {
            Ok(message) => {
                info!("Product saved: {}", message);
                self.refresh_after_mutation().await;
                Ok(message)
            }
            Err(error) => {
                self.handle_session_expiry(&error);
                Err(AdminError::from_api(error))
            }
        }
    }

    /// Delete a product, then refresh the listing.
    pub async fn delete(&mut self, id: ProductId) -> Result<String, AdminError> {
        match self.backend.delete_product(id).await {
            Ok(message) => {
                info!("Product {} deleted", id);
                self.refresh_after_mutation().await;
                Ok(message)
            }
            Err(error) => {
                self.handle_session_expiry(&error);
                Err(AdminError::from_api(error))
            }
        }
    }

    async fn refresh_after_mutation(&mut self) {
        if let Err(error) = self.refresh().await {
            warn!("Listing refresh after save failed: {}", error);
        }
    }

    fn handle_session_expiry(&mut self, error: &ApiError) {
        if error.is_session_expired() {
            warn!("Session expired; dropping stored credentials");
            self.session.invalidate();
        }
    }
}
