//! Cart behaviour through the decentralized store.

mod common;

use common::product;
use fakestore_commerce::{Currency, ProductId};
use fakestore_state::stores::CartStore;

fn lines(store: &CartStore) -> Vec<(u64, u32)> {
    store
        .items()
        .iter()
        .map(|i| (i.product.id.get(), i.quantity))
        .collect()
}

#[test]
fn add_twice_then_remove_down_to_one_line() {
    let mut store = CartStore::new(Currency::USD);
    store.add_to_cart(product(1, 10.0));
    store.add_to_cart(product(1, 10.0));
    store.add_to_cart(product(2, 5.0));

    assert_eq!(lines(&store), vec![(1, 2), (2, 1)]);
    assert_eq!(store.item_count(), 3);
    assert_eq!(store.total().amount_cents, 2500);

    store.remove_from_cart(ProductId::new(1));
    assert_eq!(lines(&store), vec![(1, 1), (2, 1)]);
    assert_eq!(store.total().amount_cents, 1500);

    store.remove_from_cart(ProductId::new(1));
    assert_eq!(lines(&store), vec![(2, 1)]);
    assert_eq!(store.total().amount_cents, 500);
}

#[test]
fn emptied_cart_reports_zero_totals() {
    let mut store = CartStore::new(Currency::USD);
    store.add_to_cart(product(1, 10.0));
    store.remove_from_cart(ProductId::new(1));

    assert!(store.is_empty());
    assert_eq!(store.item_count(), 0);
    assert!(store.total().is_zero());
}

#[test]
fn removing_unknown_product_changes_nothing() {
    let mut store = CartStore::new(Currency::USD);
    store.add_to_cart(product(1, 10.0));
    let before = store.cart().clone();

    store.remove_from_cart(ProductId::new(42));
    store.clear_cart(ProductId::new(42));

    assert_eq!(store.cart(), &before);
}

/// Deterministic pseudo-random sequence so the test is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

#[test]
fn random_mutations_match_a_reference_model() {
    let mut rng = Lcg(7);
    let mut store = CartStore::new(Currency::USD);
    // Reference: ordered (id, quantity) pairs.
    let mut model: Vec<(u64, u32)> = Vec::new();

    for _ in 0..2_000 {
        let id = rng.next(6) + 1;
        match rng.next(10) {
            0..=5 => {
                store.add_to_cart(product(id, id as f64 * 1.25));
                match model.iter_mut().find(|(m, _)| *m == id) {
                    Some((_, q)) => *q += 1,
                    None => model.push((id, 1)),
                }
            }
            6..=8 => {
                store.remove_from_cart(ProductId::new(id));
                if let Some(pos) = model.iter().position(|(m, _)| *m == id) {
                    if model[pos].1 > 1 {
                        model[pos].1 -= 1;
                    } else {
                        model.remove(pos);
                    }
                }
            }
            _ => {
                store.clear_cart(ProductId::new(id));
                model.retain(|(m, _)| *m != id);
            }
        }

        assert_eq!(lines(&store), model);
        assert!(store.items().iter().all(|i| i.quantity >= 1));

        let expected_count: u64 = model.iter().map(|(_, q)| u64::from(*q)).sum();
        let expected_cents: i64 = model.iter().map(|(id, q)| *id as i64 * 125 * i64::from(*q)).sum();
        assert_eq!(store.item_count(), expected_count);
        assert_eq!(store.total().amount_cents, expected_cents);
        assert_eq!(store.is_empty(), model.is_empty());
    }
}

#[test]
fn quantity_equals_number_of_adds() {
    let mut store = CartStore::new(Currency::USD);
    let adds = [3u64, 1, 3, 2, 3, 1];
    for id in adds {
        store.add_to_cart(product(id, 1.0));
    }

    assert_eq!(lines(&store), vec![(3, 3), (1, 2), (2, 1)]);
}
