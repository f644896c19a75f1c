//! The product source seam.

use async_trait::async_trait;
use fakestore_commerce::{catalog::Product, ProductId};

use crate::FetchError;

/// Something that can hand out product records.
///
/// Implementations perform one retrieval per call and never retry; retrying
/// is the caller's decision.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Retrieve the full product list (`GET /products`).
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Retrieve a single product (`GET /products/{id}`).
    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError>;
}

#[async_trait]
impl<S: ProductSource + ?Sized> ProductSource for std::sync::Arc<S> {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_products().await
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        (**self).fetch_product(id).await
    }
}

/// In-memory source over a fixed product list.
///
/// Backs offline mode with the bundled seed catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticProductSource {
    products: Vec<Product>,
}

impl StaticProductSource {
    /// Create a source serving `products`.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Source serving the bundled seed catalog.
    pub fn seeded() -> Self {
        Self::new(fakestore_commerce::catalog::seed::default_products())
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        Ok(self.products.clone())
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(FetchError::NotFound(id))
    }
}
