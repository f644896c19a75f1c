//! Decentralized stores.
//!
//! Each store owns one slice of state; `AppStores` bundles them into the
//! application context.

mod app;
mod cart_store;
mod catalog_store;

pub use app::AppStores;
pub use cart_store::CartStore;
pub use catalog_store::CatalogStore;
