//! Product catalog and shopping cart domain types for the fake store.
//!
//! This crate holds the synchronous bookkeeping shared by every store flavour:
//!
//! - **Catalog**: Products as served by the remote product API, keyed by id
//! - **Cart**: Ordered line items with merge-by-id quantity semantics
//! - **Money**: Integer minor-unit amounts so totals never drift
//!
//! # Example
//!
//! ```rust
//! use fakestore_commerce::prelude::*;
//!
//! let backpack = Product::new(1, "Backpack", 10.0);
//! let shirt = Product::new(2, "T-Shirt", 5.0);
//!
//! let mut cart = Cart::new(Currency::USD);
//! cart.add_product(backpack.clone());
//! cart.add_product(backpack);
//! cart.add_product(shirt);
//!
//! assert_eq!(cart.item_count(), 3);
//! assert_eq!(cart.total().display(), "$25.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{seed, Catalog, CatalogState, Product, Rating};

    // Cart
    pub use crate::cart::{Cart, CartTotals, LineItem};
}
