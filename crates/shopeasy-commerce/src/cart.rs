//! Shopping cart with stock-aware quantity guards.

use crate::catalog::Product;
use crate::error::CartRejection;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// Name and unit price are captured when the product is first added and
/// never change afterwards; `known_stock` tracks the level from the most
/// recent fetch that included the product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Name at the time of first add.
    pub name: String,
    /// Unit price at the time of first add.
    pub unit_price: Money,
    /// Stock level from the most recent fetch that included the product.
    pub known_stock: i64,
    /// Units in the cart.
    pub quantity: i64,
}

impl CartItem {
    fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            known_stock: product.stock,
            quantity: 1,
        }
    }

    /// Line subtotal (unit price times quantity), pinned at the
    /// representable bounds.
    pub fn subtotal(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// A shopping cart.
///
/// Lines keep insertion order. No mutation ever leaves a quantity above
/// the stock ceiling known at the time of the mutation; a request that
/// would do so is refused whole with a [`CartRejection`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// A product with zero stock is refused outright, whether or not it is
    /// already in the cart. For a product already present, the quantity
    /// grows by one unless that would exceed the passed product's stock;
    /// on success the line also adopts that stock value as its new
    /// ceiling. Returns the line's resulting quantity.
    pub fn add(&mut self, product: &Product) -> Result<i64, CartRejection> {
        if product.is_out_of_stock() {
            return Err(CartRejection::OutOfStock);
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing.quantity.saturating_add(1);
            if !product.can_fulfill(new_quantity) {
                return Err(CartRejection::StockLimit {
                    available: product.stock,
                });
            }
            existing.quantity = new_quantity;
            existing.known_stock = product.stock;
            return Ok(new_quantity);
        }

        self.items.push(CartItem::new(product));
        Ok(1)
    }

    /// Set a line's quantity directly.
    ///
    /// A quantity below one is ignored, as is a product with no line in
    /// the cart; both return `Ok(false)` with the cart untouched. A
    /// quantity above the line's last-known stock is refused. Returns
    /// `Ok(true)` when the new quantity was applied.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CartRejection> {
        if quantity < 1 {
            return Ok(false);
        }

        let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) else {
            return Ok(false);
        };

        if quantity > item.known_stock {
            return Err(CartRejection::StockLimit {
                available: item.known_stock,
            });
        }

        item.quantity = quantity;
        Ok(true)
    }

    /// Remove a line entirely.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Bring each line's known stock up to date from a fetched product list.
    ///
    /// A later fetch's stock value always supersedes whatever a line was
    /// carrying. Quantities are left alone even when stock drops below
    /// them; the ceiling applies to mutations, and the server remains the
    /// final arbiter at order submission.
    pub fn refresh_stock(&mut self, products: &[Product]) {
        for item in &mut self.items {
            if let Some(product) = products.iter().find(|p| p.id == item.product_id) {
                item.known_stock = product.stock;
            }
        }
    }

    /// Total amount, folded from the lines on every call.
    ///
    /// Extreme prices or quantities pin the result at the representable
    /// bounds rather than wrapping.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, item| acc.saturating_add(item.subtotal()))
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Quantity held for a product, zero when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map(|i| i.quantity).unwrap_or(0)
    }
}
