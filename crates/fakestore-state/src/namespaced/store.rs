//! Root store owning the cart and products modules.

use fakestore_commerce::cart::{Cart, LineItem};
use fakestore_commerce::catalog::{Catalog, Product};
use fakestore_commerce::{CommerceError, Currency, Money, ProductId};
use fakestore_data::{FetchError, ProductSource};

use super::{
    cart, products, qualified_name, ActionContext, CartAction, CartModule, Journal, Module, Named,
    ProductsModule,
};

/// A single store made of the `cart` and `products` modules.
///
/// State is readable through getters; it changes only through the actions
/// below, which commit module mutations. Every committed mutation is recorded
/// by its namespaced name in [`Store::journal`], which keeps the most recent
/// [`Journal::DEFAULT_CAPACITY`] entries unless configured otherwise.
#[derive(Debug)]
pub struct Store<S> {
    source: S,
    cart: Cart,
    products: Catalog,
    journal: Journal,
}

impl<S: ProductSource> Store<S> {
    /// Create a store with an empty cart and catalog.
    pub fn new(source: S, currency: Currency) -> Self {
        Self {
            source,
            cart: Cart::new(currency),
            products: Catalog::new(),
            journal: Journal::default(),
        }
    }

    /// Keep at most `capacity` journal entries; 0 turns recording off.
    pub fn with_journal_capacity(mut self, capacity: usize) -> Self {
        self.journal = Journal::with_capacity(capacity);
        self
    }

    /// Dispatch an action to the cart module.
    pub fn dispatch(&mut self, action: CartAction) -> Result<(), CommerceError> {
        tracing::debug!(action = %qualified_name(CartModule::NAMESPACE, action.name()), "dispatch");
        let mut ctx = ActionContext::<CartModule>::new(&mut self.cart, &mut self.journal);
        cart::run(&mut ctx, action)
    }

    /// `products/fetchProducts`
    pub async fn fetch_products(&mut self) -> Result<Vec<Product>, FetchError> {
        let mut ctx = ActionContext::<ProductsModule>::new(&mut self.products, &mut self.journal);
        products::fetch_products(&mut ctx, &self.source).await
    }

    /// `products/fetchProductById`
    pub async fn fetch_product_by_id(&mut self, id: ProductId) -> Result<Product, FetchError> {
        let mut ctx = ActionContext::<ProductsModule>::new(&mut self.products, &mut self.journal);
        products::fetch_product_by_id(&mut ctx, &self.source, id).await
    }

    /// Root action: load everything the app needs before first render.
    ///
    /// A failure is logged and returned.
    pub async fn initialize_app(&mut self) -> Result<(), FetchError> {
        if let Err(e) = self.fetch_products().await {
            tracing::error!(error = %e, "Failed to initialize app");
            return Err(e);
        }
        Ok(())
    }

    /// Root getter: the app counts as initialized once products are loaded.
    pub fn is_initialized(&self) -> bool {
        self.product_count() > 0
    }

    /// `cart` module state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// `cart/items`
    pub fn cart_items(&self) -> &[LineItem] {
        cart::items(&self.cart)
    }

    /// `cart/itemCount`
    pub fn cart_item_count(&self) -> u64 {
        cart::item_count(&self.cart)
    }

    /// `cart/total`
    pub fn cart_total(&self) -> Money {
        cart::total(&self.cart)
    }

    /// `products` module state.
    pub fn products(&self) -> &Catalog {
        &self.products
    }

    /// `products/getById`
    pub fn get_by_id(&self, id: ProductId) -> Option<&Product> {
        products::get_by_id(&self.products, id)
    }

    /// Number of known products.
    pub fn product_count(&self) -> usize {
        products::count(&self.products)
    }

    /// Namespaced names of the most recently committed mutations, oldest first.
    pub fn journal(&self) -> &[String] {
        self.journal.entries()
    }
}
