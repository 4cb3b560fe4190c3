//! Order submission payloads.

use crate::cart::Cart;
use crate::ids::{ProductId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One ordered line: which product, how many, at the price the buyer saw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product being ordered.
    pub product_id: ProductId,
    /// Units ordered.
    pub quantity: i64,
    /// Unit price captured when the product entered the cart.
    pub unit_price: Money,
}

/// An order ready for submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    /// Buyer, when the session identifies one.
    pub user_id: Option<UserId>,
    /// Lines in cart insertion order.
    pub lines: Vec<OrderLine>,
}

impl OrderDraft {
    /// Build a draft from the cart's lines, keeping their order.
    pub fn from_cart(cart: &Cart, user_id: Option<UserId>) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| OrderLine {
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            })
            .collect();
        Self { user_id, lines }
    }

    /// Check if the draft carries no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total across all lines, pinned at the representable bounds.
    pub fn total(&self) -> Money {
        self.lines.iter().fold(Money::zero(), |acc, line| {
            acc.saturating_add(line.unit_price.saturating_mul(line.quantity))
        })
    }
}
