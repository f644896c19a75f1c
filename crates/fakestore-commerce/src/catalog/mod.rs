//! Product catalog module.
//!
//! Contains the product record and the id-keyed catalog that owns it.

mod catalog;
mod product;
pub mod seed;

pub use catalog::{Catalog, CatalogState};
pub use product::{Product, Rating};
