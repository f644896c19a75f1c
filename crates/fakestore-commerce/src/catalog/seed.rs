//! Bundled products for offline use.

use crate::catalog::Product;

/// The static catalog shipped with the app, used when no product API is reachable.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(1, "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops", 109.95)
            .with_description(
                "Your perfect pack for everyday use and walks in the forest. Stash your laptop (up to 15 inches) in the padded sleeve, your everyday",
            )
            .with_category("men's clothing")
            .with_image("https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg")
            .with_rating(3.9, 120),
        Product::new(2, "Mens Casual Premium Slim Fit T-Shirts ", 22.3)
            .with_description(
                "Slim-fitting style, contrast raglan long sleeve, three-button henley placket, light weight & soft fabric for breathable and comfortable wearing.",
            )
            .with_category("men's clothing")
            .with_image("https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg")
            .with_rating(4.1, 259),
        Product::new(3, "John Hardy Women's Legends Naga Gold & Silver Dragon Bracelet", 695.0)
            .with_description(
                "From our Legends Collection, the Naga was inspired by the mythical water dragon that protects the ocean's pearl. Wear facing inward to be bestowed with love and abundance, or outward for protection.",
            )
            .with_category("jewelery")
            .with_image("https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg")
            .with_rating(4.6, 400),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = default_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }
}
