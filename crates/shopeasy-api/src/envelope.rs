//! Wire envelopes for the ShopEasy backend.
//!
//! Field names match the server's JSON exactly. The server is loose with
//! numeric types: price and count may arrive as numbers or as numeric
//! strings, so decoding accepts both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use shopeasy_commerce::catalog::{CatalogPage, Product, ProductDraft};
use shopeasy_commerce::ids::ProductId;
use shopeasy_commerce::money::Money;
use shopeasy_commerce::order::OrderDraft;

/// Response envelope common to the mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Whether the server accepted the request.
    pub success: bool,
    /// Server message, often empty on success.
    #[serde(default)]
    pub message: String,
}

/// Response envelope for the paged product listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPageEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Page the server answered for.
    #[serde(default)]
    pub page: i64,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: i64,
    #[serde(default, rename = "totalRecords")]
    pub total_records: i64,
    #[serde(default, rename = "totalPages")]
    pub total_pages: i64,
    #[serde(default)]
    pub data: Vec<ProductDto>,
}

impl ProductPageEnvelope {
    /// Convert the data rows into a domain catalog page.
    pub fn into_catalog_page(self) -> CatalogPage {
        CatalogPage {
            products: self
                .data
                .into_iter()
                .map(ProductDto::into_product)
                .collect(),
            page: self.page,
            limit: self.limit,
            total_records: self.total_records,
            total_pages: self.total_pages,
        }
    }
}

/// A product row as the server sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub product_name: String,
    #[serde(deserialize_with = "decimal_or_string")]
    pub price: f64,
    #[serde(default, deserialize_with = "int_or_string")]
    pub count: i64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ProductDto {
    /// Convert into the domain product type.
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.product_name,
            price: Money::from_rupees(self.price),
            stock: self.count,
            sku: self.sku,
            brand: self.brand,
            description: self.description,
            image_url: self.image,
            created_at: self.created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Request body for order submission.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub user_id: Option<i64>,
    pub items: Vec<OrderItemDto>,
}

/// One submitted order line.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemDto {
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

impl OrderRequest {
    /// Build the wire payload from a draft, keeping line order.
    pub fn from_draft(draft: &OrderDraft) -> Self {
        Self {
            user_id: draft.user_id.map(|id| id.get()),
            items: draft
                .lines
                .iter()
                .map(|line| OrderItemDto {
                    product_id: line.product_id.get(),
                    quantity: line.quantity,
                    price: line.unit_price.to_rupees(),
                })
                .collect(),
        }
    }
}

/// Request body for product create and update.
#[derive(Debug, Clone, Serialize)]
pub struct ProductUpsertRequest {
    pub product_name: String,
    pub sku: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub count: i64,
    pub image: String,
}

impl ProductUpsertRequest {
    /// Build the wire payload from a draft.
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            product_name: draft.name.clone(),
            sku: draft.sku.clone(),
            price: draft.price.to_rupees(),
            description: draft.description.clone(),
            brand: draft.brand.clone(),
            count: draft.stock,
            image: draft.image_url.clone(),
        }
    }
}

/// Accept a JSON number or a numeric string.
fn decimal_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Accept a JSON integer or a numeric string.
fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
