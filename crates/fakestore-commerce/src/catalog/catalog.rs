//! The in-memory set of known products.

use crate::catalog::Product;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Whether the catalog has ever been populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogState {
    /// No product has been loaded yet.
    Empty,
    /// At least one fetch has succeeded.
    Populated,
}

/// Products keyed by id, kept in the order the product source returned them.
///
/// Holds at most one product per id. There is no clear operation: once
/// populated, a catalog stays populated, even if a later fetch returns nothing.
/// Deserialization goes through [`Catalog::replace_all`], so a stored catalog
/// with repeated ids collapses to one entry per id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CatalogRepr")]
pub struct Catalog {
    products: Vec<Product>,
    populated: bool,
}

#[derive(Deserialize)]
struct CatalogRepr {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    populated: bool,
}

impl From<CatalogRepr> for Catalog {
    fn from(repr: CatalogRepr) -> Self {
        let mut catalog = Catalog::new();
        if repr.populated || !repr.products.is_empty() {
            catalog.replace_all(repr.products);
        }
        catalog
    }
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog with a fresh product list.
    ///
    /// A product id repeated in `products` keeps its first position and the
    /// last record seen for it. Marks the catalog populated.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        let mut fresh = Catalog {
            products: Vec::with_capacity(products.len()),
            populated: true,
        };
        for product in products {
            fresh.upsert(product);
        }
        *self = fresh;
    }

    /// Insert a product, replacing any existing record with the same id in place.
    ///
    /// Returns `true` if the id was not present before.
    pub fn upsert(&mut self, product: Product) -> bool {
        self.populated = true;
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                *existing = product;
                false
            }
            None => {
                self.products.push(product);
                true
            }
        }
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Check whether a product id is known.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// All products in source order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Known product ids in source order.
    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id).collect()
    }

    /// Number of known products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if no product is known.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// `Populated` once any full replace or upsert has happened; never reverts.
    pub fn state(&self) -> CatalogState {
        if self.populated {
            CatalogState::Populated
        } else {
            CatalogState::Empty
        }
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Products in a category (case-insensitive match).
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.category.eq_ignore_ascii_case(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product::new(id, title, 1.0)
    }

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert_eq!(catalog.state(), CatalogState::Empty);
        assert!(catalog.get(ProductId::new(1)).is_none());
    }

    #[test]
    fn test_replace_all_is_a_full_replace() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product(1, "a"), product(2, "b")]);
        catalog.replace_all(vec![product(3, "c")]);

        assert_eq!(catalog.ids(), vec![ProductId::new(3)]);
        assert_eq!(catalog.state(), CatalogState::Populated);
    }

    #[test]
    fn test_replace_all_collapses_duplicate_ids() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product(1, "old"), product(2, "b"), product(1, "new")]);

        assert_eq!(catalog.ids(), vec![ProductId::new(1), ProductId::new(2)]);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().title, "new");
    }

    #[test]
    fn test_upsert_keeps_one_entry_per_id() {
        let mut catalog = Catalog::new();
        assert!(catalog.upsert(product(7, "first")));
        assert!(!catalog.upsert(product(7, "second")));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(ProductId::new(7)).unwrap().title, "second");
    }

    #[test]
    fn test_empty_replace_keeps_populated_state() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![product(1, "a"), product(2, "b")]);
        catalog.replace_all(Vec::new());

        assert!(catalog.is_empty());
        assert_eq!(catalog.state(), CatalogState::Populated);
    }

    #[test]
    fn test_deserialize_collapses_duplicate_ids() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"products":[
                {"id":1,"title":"old","price":1.0},
                {"id":2,"title":"b","price":2.0},
                {"id":1,"title":"new","price":3.0}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.ids(), vec![ProductId::new(1), ProductId::new(2)]);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().title, "new");
        assert_eq!(catalog.state(), CatalogState::Populated);
    }

    #[test]
    fn test_serde_keeps_state() {
        let mut populated = Catalog::new();
        populated.replace_all(Vec::new());

        let json = serde_json::to_string(&populated).unwrap();
        let restored: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, populated);
        assert_eq!(restored.state(), CatalogState::Populated);

        let fresh: Catalog = serde_json::from_str("{}").unwrap();
        assert_eq!(fresh.state(), CatalogState::Empty);
    }

    #[test]
    fn test_categories_and_filter() {
        let mut catalog = Catalog::new();
        catalog.replace_all(vec![
            product(1, "a").with_category("men's clothing"),
            product(2, "b").with_category("jewelery"),
            product(3, "c").with_category("men's clothing"),
        ]);

        assert_eq!(catalog.categories(), vec!["men's clothing", "jewelery"]);
        let ids: Vec<u64> = catalog.in_category("Jewelery").map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2]);
    }
}
