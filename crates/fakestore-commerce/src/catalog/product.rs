//! Product and rating types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating value.
    pub rate: f64,
    /// Number of ratings.
    pub count: u32,
}

/// A product in the catalog.
///
/// Field names follow the remote product API so records deserialize
/// without renaming. Products are read-only once they reach a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub title: String,
    /// Unit price as served by the product API.
    pub price: f64,
    /// Product description.
    #[serde(default)]
    pub description: String,
    /// Product category (e.g., "men's clothing").
    #[serde(default)]
    pub category: String,
    /// URL to the product image.
    #[serde(default)]
    pub image: String,
    /// Customer rating.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Create a product with the required fields; the rest start empty.
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u32) -> Self {
        self.rating = Rating { rate, count };
        self
    }

    /// Unit price in minor units of `currency`.
    pub fn unit_price(&self, currency: Currency) -> Money {
        Money::from_decimal(self.price, currency)
    }
}
