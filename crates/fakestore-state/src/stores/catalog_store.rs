//! Catalog store.

use fakestore_commerce::catalog::{Catalog, CatalogState, Product};
use fakestore_commerce::ProductId;
use fakestore_data::{FetchError, ProductSource};

/// Holds the product catalog and fetches it through a [`ProductSource`].
///
/// Fetch failures are logged where they happen and returned to the caller.
/// The catalog is only changed by a successful fetch. Fetches take
/// `&mut self`, so two of them can never interleave on the same store.
#[derive(Debug)]
pub struct CatalogStore<S> {
    source: S,
    catalog: Catalog,
}

impl<S: ProductSource> CatalogStore<S> {
    /// Create a store with an empty catalog.
    pub fn new(source: S) -> Self {
        Self {
            source,
            catalog: Catalog::new(),
        }
    }

    /// Create a store whose catalog starts with `products`.
    pub fn seeded(source: S, products: Vec<Product>) -> Self {
        let mut catalog = Catalog::new();
        catalog.replace_all(products);
        Self { source, catalog }
    }

    /// Fetch the full product list and replace the catalog with it.
    pub async fn fetch_all_products(&mut self) -> Result<&[Product], FetchError> {
        match self.source.fetch_products().await {
            Ok(products) => {
                tracing::info!(count = products.len(), "loaded products");
                self.catalog.replace_all(products);
                Ok(self.catalog.products())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                Err(e)
            }
        }
    }

    /// Return a product, fetching and caching it if it is not known yet.
    ///
    /// A cached product is returned without touching the source.
    pub async fn fetch_product_by_id(&mut self, id: ProductId) -> Result<Product, FetchError> {
        if let Some(product) = self.catalog.get(id) {
            tracing::trace!(product_id = %id, "catalog hit");
            return Ok(product.clone());
        }

        match self.source.fetch_product(id).await {
            Ok(product) => {
                tracing::debug!(product_id = %id, "fetched product");
                self.catalog.upsert(product.clone());
                Ok(product)
            }
            Err(e) => {
                tracing::error!(product_id = %id, error = %e, "Error fetching product");
                Err(e)
            }
        }
    }

    /// Look up a known product. Never fetches.
    pub fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// All known products in source order.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Number of known products.
    pub fn count(&self) -> usize {
        self.catalog.len()
    }

    pub fn state(&self) -> CatalogState {
        self.catalog.state()
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The product source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
