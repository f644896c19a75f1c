//! Application context bundling the decentralized stores.

use fakestore_commerce::Currency;
use fakestore_data::{FetchError, ProductSource};

use crate::stores::{CartStore, CatalogStore};

/// The stores an application works with, created once at start-up.
#[derive(Debug)]
pub struct AppStores<S> {
    /// Cart state.
    pub cart: CartStore,
    /// Product catalog.
    pub catalog: CatalogStore<S>,
}

impl<S: ProductSource> AppStores<S> {
    /// Create an empty cart and catalog backed by `source`.
    pub fn new(source: S, currency: Currency) -> Self {
        Self {
            cart: CartStore::new(currency),
            catalog: CatalogStore::new(source),
        }
    }

    /// Load the catalog.
    pub async fn initialize(&mut self) -> Result<(), FetchError> {
        self.catalog.fetch_all_products().await?;
        Ok(())
    }

    /// True once the catalog holds at least one product.
    pub fn is_initialized(&self) -> bool {
        self.catalog.count() > 0
    }
}
