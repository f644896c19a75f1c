//! Derived cart aggregates.

use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Snapshot of a cart's derived values, recomputed on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all quantities.
    pub item_count: u64,
    /// Number of line items.
    pub unique_items: usize,
    /// Sum of `price * quantity`.
    pub total: Money,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub fn empty(currency: Currency) -> Self {
        Self {
            item_count: 0,
            unique_items: 0,
            total: Money::zero(currency),
        }
    }

    /// Check if the totals describe an empty cart.
    pub fn is_empty(&self) -> bool {
        self.unique_items == 0
    }

    /// Total as a plain decimal, e.g. `25.0`.
    pub fn total_decimal(&self) -> f64 {
        self.total.to_decimal()
    }
}
