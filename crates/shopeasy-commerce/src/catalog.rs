//! Catalog product types.

use crate::error::DraftError;
use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product as listed in the catalog.
///
/// `stock` is the level reported by the fetch that produced this value;
/// it goes stale the moment a newer fetch lands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units in stock at fetch time.
    pub stock: i64,
    /// Stock-keeping unit code.
    pub sku: Option<String>,
    /// Brand name.
    pub brand: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Image URL.
    pub image_url: Option<String>,
    /// Creation time, when the server reports one.
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create a product with the required fields; the rest default to absent.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            sku: None,
            brand: None,
            description: None,
            image_url: None,
            created_at: None,
        }
    }

    /// Set the SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Check if the product has no stock at all.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0
    }

    /// Check if a specific quantity is coverable by the reported stock.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }
}

/// One page of the catalog, as answered by a fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// 1-indexed page number the server answered for.
    pub page: i64,
    /// Page size the server applied.
    pub limit: i64,
    /// Total products across all pages.
    pub total_records: i64,
    /// Total number of pages.
    pub total_pages: i64,
}

impl CatalogPage {
    /// Page with no products and no totals.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if the page carries no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products on this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// Form input for creating or updating a product.
///
/// Name, SKU, and price are required; the rest may stay empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Stock-keeping unit code.
    pub sku: String,
    /// Unit price.
    pub price: Money,
    /// Long description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Units in stock.
    pub stock: i64,
    /// Image URL.
    pub image_url: String,
}

impl ProductDraft {
    /// Create a draft with the required fields filled in.
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            price,
            ..Self::default()
        }
    }

    /// Set the stock count.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Set the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check the draft is submittable.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingField("product_name"));
        }
        if self.sku.trim().is_empty() {
            return Err(DraftError::MissingField("sku"));
        }
        if self.price.is_negative() {
            return Err(DraftError::NegativePrice);
        }
        if self.stock < 0 {
            return Err(DraftError::NegativeStock);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_stock_checks() {
        let product = Product::new(ProductId::new(1), "Widget", Money::new(999), 3);
        assert!(!product.is_out_of_stock());
        assert!(product.can_fulfill(3));
        assert!(!product.can_fulfill(4));

        let gone = Product::new(ProductId::new(2), "Gone", Money::new(999), 0);
        assert!(gone.is_out_of_stock());
    }

    #[test]
    fn test_catalog_page_empty() {
        let page = CatalogPage::empty();
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.total_records, 0);
    }

    #[test]
    fn test_draft_validation() {
        let draft = ProductDraft::new("Widget", "WID-1", Money::new(999));
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_missing_name() {
        let draft = ProductDraft::new("  ", "WID-1", Money::new(999));
        assert_eq!(draft.validate(), Err(DraftError::MissingField("product_name")));
    }

    #[test]
    fn test_draft_missing_sku() {
        let draft = ProductDraft::new("Widget", "", Money::new(999));
        assert_eq!(draft.validate(), Err(DraftError::MissingField("sku")));
    }

    #[test]
    fn test_draft_negative_price() {
        let draft = ProductDraft::new("Widget", "WID-1", Money::new(-1));
        assert_eq!(draft.validate(), Err(DraftError::NegativePrice));
    }

    #[test]
    fn test_draft_negative_stock() {
        let draft = ProductDraft::new("Widget", "WID-1", Money::new(999)).with_stock(-5);
        assert_eq!(draft.validate(), Err(DraftError::NegativeStock));
    }
}
