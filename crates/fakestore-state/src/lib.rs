//! Cart and catalog state containers for the fake store.
//!
//! Two ways of holding the same state, side by side:
//!
//! - [`stores`] - decentralized stores: one `CartStore` and one `CatalogStore`,
//!   each owning its state and exposing its own actions and getters.
//! - [`namespaced`] - a single `Store` made of namespaced modules, where actions
//!   hold the business rules and only mutations change state.
//!
//! Neither flavour keeps global state. Build the container at start-up and pass
//! it to whatever needs it.
//!
//! # Example
//!
//! ```rust,ignore
//! use fakestore_commerce::Currency;
//! use fakestore_data::StaticProductSource;
//! use fakestore_state::stores::AppStores;
//!
//! let mut app = AppStores::new(StaticProductSource::seeded(), Currency::USD);
//! app.initialize().await?;
//!
//! let backpack = app.catalog.fetch_product_by_id(1.into()).await?;
//! app.cart.add_to_cart(backpack);
//! println!("{} items, {}", app.cart.item_count(), app.cart.total());
//! ```

pub mod namespaced;
pub mod stores;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::namespaced::{ActionContext, CartAction, Module, Store};
    pub use crate::stores::{AppStores, CartStore, CatalogStore};
}
