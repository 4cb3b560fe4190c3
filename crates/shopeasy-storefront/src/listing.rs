//! Sequenced paginated product listing.
//!
//! Every fetch is issued a ticket; only the response for the most
//! recently issued ticket may land. Responses arriving out of order
//! therefore cannot overwrite newer data, the last issued fetch wins.

use tracing::warn;

use shopeasy_commerce::catalog::{CatalogPage, Product};
use shopeasy_commerce::pager::Pager;

/// Handle for one in-flight catalog fetch.
///
/// Snapshots the page and size requested when the fetch began, plus the
/// sequence number that decides whether the response is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: i64,
    limit: i64,
}

impl FetchTicket {
    /// Page number to request.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// Page size to request.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

/// Catalog listing driven by ticketed fetches.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    pager: Pager,
    products: Vec<Product>,
    seq: u64,
}

impl Listing {
    /// Empty listing with the given pagination state.
    pub fn new(pager: Pager) -> Self {
        Self {
            pager,
            products: Vec::new(),
            seq: 0,
        }
    }

    /// Products from the last applied fetch.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Pagination state.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Mutable pagination state.
    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    /// Start a fetch for the current page and size.
    ///
    /// Issuing a new ticket invalidates every earlier one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.seq += 1;
        FetchTicket {
            seq: self.seq,
            page: self.pager.page(),
            limit: self.pager.page_size(),
        }
    }

    /// Apply a fetched page if its ticket is still current.
    ///
    /// A stale ticket leaves the listing untouched and returns false.
    pub fn apply(&mut self, ticket: &FetchTicket, page: CatalogPage) -> bool {
        if ticket.seq != self.seq {
            warn!("Discarding stale catalog response for page {}", ticket.page);
            return false;
        }
        self.pager.record_total(page.total_records);
        self.products = page.products;
        true
    }
}
