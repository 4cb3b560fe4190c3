//! Browse the catalog against a running ShopEasy backend.
//!
//! Expects the API at http://localhost:3002; override with
//! SHOPEASY_API_URL. Run with:
//!
//! ```sh
//! cargo run --example browse
//! ```

use anyhow::Result;

use shopeasy_api::{ApiClient, ApiConfig};
use shopeasy_auth::SessionContext;
use shopeasy_storefront::Storefront;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::from_env();
    println!("Talking to {}", config.base_url);

    let client = ApiClient::new(&config)?;
    let mut store = Storefront::new(client, SessionContext::anonymous());

    store.refresh_catalog().await?;
    println!(
        "Page {} of {} ({} products here, {} total)",
        store.pager().page(),
        store.pager().total_pages(),
        store.catalog().len(),
        store.pager().total_records()
    );
    for product in store.catalog() {
        println!(
            "  [{}] {} at {} ({} in stock)",
            product.id, product.name, product.price, product.stock
        );
    }

    // Drop the first available product in the cart to show the total.
    if let Some(pick) = store.catalog().iter().find(|p| !p.is_out_of_stock()).cloned() {
        store.add_to_cart(&pick)?;
        println!("Added '{}'; cart total is {}", pick.name, store.cart_total());
    }

    Ok(())
}
