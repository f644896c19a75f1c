//! Cart store.

use fakestore_commerce::cart::{Cart, CartTotals, LineItem};
use fakestore_commerce::catalog::Product;
use fakestore_commerce::{Currency, Money, ProductId};

/// Holds the cart and exposes its actions and getters.
///
/// None of the actions fail; unknown product ids are silently ignored.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Cart,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
        }
    }

    /// Create a store around an existing cart.
    pub fn from_cart(cart: Cart) -> Self {
        Self { cart }
    }

    /// Add one unit of `product`.
    pub fn add_to_cart(&mut self, product: Product) {
        let product_id = product.id;
        self.cart.add_product(product);
        tracing::debug!(
            %product_id,
            quantity = self.cart.get(product_id).map(|i| i.quantity).unwrap_or(0),
            "added to cart"
        );
    }

    /// Remove one unit of a product, dropping the line at quantity 1.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        if self.cart.remove_one(product_id) {
            tracing::debug!(
                %product_id,
                quantity = self.cart.get(product_id).map(|i| i.quantity).unwrap_or(0),
                "removed from cart"
            );
        }
    }

    /// Remove a product's line whatever its quantity.
    pub fn clear_cart(&mut self, product_id: ProductId) {
        if self.cart.remove_line(product_id) {
            tracing::debug!(%product_id, "cleared line from cart");
        }
    }

    /// Empty the cart.
    pub fn clear_all_cart(&mut self) {
        self.cart.clear();
        tracing::debug!("cleared cart");
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Sum of `price * quantity`.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}
