//! Shared fixtures for store tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use fakestore_commerce::catalog::Product;
use fakestore_commerce::ProductId;
use fakestore_data::{FetchError, ProductSource};

/// In-memory source that counts calls and can be switched to failing.
#[derive(Debug, Default)]
pub struct CountingSource {
    products: Vec<Product>,
    failing: AtomicBool,
    list_calls: AtomicUsize,
    item_calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(products: Vec<Product>) -> Arc<Self> {
        Arc::new(Self {
            products,
            ..Default::default()
        })
    }

    /// Make every following call fail with HTTP 500.
    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn item_calls(&self) -> usize {
        self.item_calls.load(Ordering::SeqCst)
    }

    fn check(&self, url: &str) -> Result<(), FetchError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::Http {
                status: 500,
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductSource for CountingSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check("/products")?;
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.item_calls.fetch_add(1, Ordering::SeqCst);
        self.check(&format!("/products/{id}"))?;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }
}

pub fn product(id: u64, price: f64) -> Product {
    Product::new(id, format!("Product {id}"), price)
}

/// Products 1..=n priced at `id` dollars.
pub fn products(n: u64) -> Vec<Product> {
    (1..=n).map(|id| product(id, id as f64)).collect()
}
