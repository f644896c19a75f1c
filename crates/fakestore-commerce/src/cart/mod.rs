//! Shopping cart module.
//!
//! Contains types for the cart, its line items, and derived totals.

mod cart;
mod totals;

pub use cart::{Cart, LineItem};
pub use totals::CartTotals;
