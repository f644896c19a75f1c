//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;
use crate::money::Currency;

/// Errors raised by the primitive and restore paths of the cart.
///
/// The canonical cart operations (add, remove one, remove line, clear) never
/// fail; these variants only guard the index-addressed mutations and the
/// validated restore.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Line item quantities must be at least one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// A cart may hold at most one line item per product.
    #[error("Duplicate line item for product {0}")]
    DuplicateLineItem(ProductId),

    /// Index-addressed mutation outside the line item sequence.
    #[error("Line index {index} out of range for cart of {len} items")]
    LineIndexOutOfRange { index: usize, len: usize },

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },
}
