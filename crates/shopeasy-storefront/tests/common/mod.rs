//! Scripted in-memory backend for driving shell flows without a server.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use shopeasy_api::ApiError;
use shopeasy_commerce::catalog::{CatalogPage, Product, ProductDraft};
use shopeasy_commerce::ids::ProductId;
use shopeasy_commerce::money::Money;
use shopeasy_commerce::order::OrderDraft;
use shopeasy_storefront::StoreBackend;

/// Backend whose answers are queued up front and whose calls are logged.
///
/// When a queue runs dry the call succeeds with a bland default, so a
/// test only scripts the answers it cares about.
#[derive(Default)]
pub struct ScriptedBackend {
    pages: Mutex<VecDeque<Result<CatalogPage, ApiError>>>,
    order_results: Mutex<VecDeque<Result<String, ApiError>>>,
    save_results: Mutex<VecDeque<Result<String, ApiError>>>,
    delete_results: Mutex<VecDeque<Result<String, ApiError>>>,
    fetches: Mutex<Vec<(i64, i64)>>,
    orders: Mutex<Vec<OrderDraft>>,
    saves: Mutex<Vec<(Option<ProductId>, ProductDraft)>>,
    deletes: Mutex<Vec<ProductId>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, page: CatalogPage) {
        self.pages.lock().unwrap().push_back(Ok(page));
    }

    pub fn push_page_error(&self, error: ApiError) {
        self.pages.lock().unwrap().push_back(Err(error));
    }

    pub fn push_order_result(&self, result: Result<String, ApiError>) {
        self.order_results.lock().unwrap().push_back(result);
    }

    pub fn push_save_result(&self, result: Result<String, ApiError>) {
        self.save_results.lock().unwrap().push_back(result);
    }

    pub fn push_delete_result(&self, result: Result<String, ApiError>) {
        self.delete_results.lock().unwrap().push_back(result);
    }

    /// Every `(page, limit)` pair fetched, in call order.
    pub fn fetches(&self) -> Vec<(i64, i64)> {
        self.fetches.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    /// Every order draft submitted, in call order.
    pub fn orders(&self) -> Vec<OrderDraft> {
        self.orders.lock().unwrap().clone()
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }

    /// Every save call: `None` for create, `Some(id)` for update.
    pub fn saves(&self) -> Vec<(Option<ProductId>, ProductDraft)> {
        self.saves.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<ProductId> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoreBackend for ScriptedBackend {
    async fn fetch_products(&self, page: i64, limit: i64) -> Result<CatalogPage, ApiError> {
        self.fetches.lock().unwrap().push((page, limit));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CatalogPage::empty()))
    }

    async fn submit_order(&self, draft: &OrderDraft) -> Result<String, ApiError> {
        self.orders.lock().unwrap().push(draft.clone());
        self.order_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Order placed successfully".to_string()))
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<String, ApiError> {
        self.saves.lock().unwrap().push((None, draft.clone()));
        self.save_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Product created".to_string()))
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<String, ApiError> {
        self.saves.lock().unwrap().push((Some(id), draft.clone()));
        self.save_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Product updated".to_string()))
    }

    async fn delete_product(&self, id: ProductId) -> Result<String, ApiError> {
        self.deletes.lock().unwrap().push(id);
        self.delete_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("Product deleted".to_string()))
    }
}

/// Product with the given ID, name, price in paise and stock level.
pub fn product(id: i64, name: &str, price_paise: i64, stock: i64) -> Product {
    Product::new(ProductId::new(id), name, Money::new(price_paise), stock)
}

/// Page envelope around `products`, reporting `total_records` overall.
pub fn page(products: Vec<Product>, page_no: i64, limit: i64, total_records: i64) -> CatalogPage {
    let total_pages = if limit > 0 {
        (total_records + limit - 1) / limit
    } else {
        1
    };
    CatalogPage {
        products,
        page: page_no,
        limit,
        total_records,
        total_pages,
    }
}
