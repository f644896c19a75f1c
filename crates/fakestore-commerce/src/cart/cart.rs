//! Cart and line item types.

use crate::cart::CartTotals;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Line items keep insertion order and there is at most one line per product
/// id. Every line holds a quantity of at least one: a line whose quantity
/// would drop to zero is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "CartRepr")]
pub struct Cart {
    /// Cart currency.
    currency: Currency,
    /// Items in the cart.
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
        }
    }

    /// Restore a cart from previously saved line items.
    ///
    /// Rejects zero quantities and repeated product ids.
    pub fn from_items(currency: Currency, items: Vec<LineItem>) -> Result<Self, CommerceError> {
        let mut cart = Self::new(currency);
        for item in items {
            if item.quantity == 0 {
                return Err(CommerceError::InvalidQuantity(0));
            }
            if cart.position(item.product.id).is_some() {
                return Err(CommerceError::DuplicateLineItem(item.product.id));
            }
            cart.items.push(item);
        }
        Ok(cart)
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `product.id`, or appends a new line
    /// with quantity 1. Existing lines are never reordered.
    pub fn add_product(&mut self, product: Product) {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(LineItem::new(product)),
        }
    }

    /// Remove one unit of a product.
    ///
    /// Decrements the line, or drops it when its quantity is 1. Unknown ids
    /// are ignored. Returns whether anything changed.
    pub fn remove_one(&mut self, product_id: ProductId) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };
        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
        true
    }

    /// Remove the whole line for a product, whatever its quantity.
    ///
    /// Unknown ids are ignored. Returns whether a line was removed.
    pub fn remove_line(&mut self, product_id: ProductId) -> bool {
        match self.position(product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Index of the line for a product, if present.
    pub fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product.id == product_id)
    }

    /// Append a prepared line item.
    pub fn push_line(&mut self, item: LineItem) -> Result<(), CommerceError> {
        if item.quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        if self.position(item.product.id).is_some() {
            return Err(CommerceError::DuplicateLineItem(item.product.id));
        }
        self.items.push(item);
        Ok(())
    }

    /// Overwrite the quantity of the line at `index`.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CommerceError::LineIndexOutOfRange { index, len })?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove the line at `index`, keeping the order of the others.
    pub fn remove_at(&mut self, index: usize) -> Result<LineItem, CommerceError> {
        let len = self.items.len();
        if index >= len {
            return Err(CommerceError::LineIndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of `price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(|i| i.line_total(self.currency))
            .fold(Money::zero(self.currency), Money::saturating_add)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot of the derived aggregates.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.item_count(),
            unique_items: self.unique_item_count(),
            total: self.total(),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[derive(Deserialize)]
struct CartRepr {
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    items: Vec<LineItem>,
}

impl TryFrom<CartRepr> for Cart {
    type Error = CommerceError;

    fn try_from(repr: CartRepr) -> Result<Self, Self::Error> {
        Cart::from_items(repr.currency, repr.items)
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product, as it was when added.
    pub product: Product,
    /// Quantity, at least 1 while the line is in a cart.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// `price * quantity` for this line.
    pub fn line_total(&self, currency: Currency) -> Money {
        self.product.unit_price(currency).multiply(self.quantity)
    }
}
