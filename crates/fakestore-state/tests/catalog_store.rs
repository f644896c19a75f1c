//! Catalog fetching and caching through the decentralized store.

mod common;

use common::{product, products, CountingSource};
use fakestore_commerce::catalog::CatalogState;
use fakestore_commerce::{Currency, ProductId};
use fakestore_data::{FetchError, StaticProductSource};
use fakestore_state::stores::{AppStores, CatalogStore};

#[tokio::test]
async fn fetch_all_replaces_catalog() {
    let source = CountingSource::new(products(3));
    let mut store = CatalogStore::seeded(source.clone(), vec![product(9, 1.0)]);

    let loaded = store.fetch_all_products().await.unwrap();
    assert_eq!(loaded.len(), 3);

    assert!(store.get_by_id(ProductId::new(9)).is_none());
    assert_eq!(store.count(), 3);
    assert_eq!(store.state(), CatalogState::Populated);
    assert_eq!(source.list_calls(), 1);
}

#[tokio::test]
async fn failed_fetch_leaves_catalog_untouched() {
    let source = CountingSource::new(products(3));
    let mut store = CatalogStore::new(source.clone());
    store.fetch_all_products().await.unwrap();

    source.fail(true);
    let err = store.fetch_all_products().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(store.count(), 3);
}

#[tokio::test]
async fn empty_fetch_does_not_reset_state() {
    let source = CountingSource::new(Vec::new());
    let mut store = CatalogStore::seeded(source.clone(), products(2));

    let loaded = store.fetch_all_products().await.unwrap();

    assert!(loaded.is_empty());
    assert_eq!(store.count(), 0);
    assert_eq!(store.state(), CatalogState::Populated);
}

#[tokio::test]
async fn cached_product_skips_the_source() {
    let source = CountingSource::new(products(7));
    let mut store = CatalogStore::new(source.clone());
    store.fetch_all_products().await.unwrap();

    let product = store.fetch_product_by_id(ProductId::new(7)).await.unwrap();

    assert_eq!(product.id, ProductId::new(7));
    assert_eq!(source.item_calls(), 0);
}

#[tokio::test]
async fn missing_product_is_fetched_once_then_cached() {
    let source = CountingSource::new(products(5));
    let mut store = CatalogStore::new(source.clone());
    assert_eq!(store.state(), CatalogState::Empty);

    store.fetch_product_by_id(ProductId::new(4)).await.unwrap();
    store.fetch_product_by_id(ProductId::new(4)).await.unwrap();

    assert_eq!(source.item_calls(), 1);
    assert_eq!(store.count(), 1);
    assert_eq!(store.state(), CatalogState::Populated);
}

#[tokio::test]
async fn single_fetch_failure_is_returned() {
    let source = CountingSource::new(products(2));
    let mut store = CatalogStore::new(source.clone());

    let err = store.fetch_product_by_id(ProductId::new(8)).await.unwrap_err();
    assert!(matches!(err, FetchError::NotFound(_)));

    source.fail(true);
    let err = store.fetch_product_by_id(ProductId::new(1)).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn get_by_id_never_fetches() {
    let source = CountingSource::new(products(3));
    let mut store = CatalogStore::new(source.clone());

    assert!(store.get_by_id(ProductId::new(2)).is_none());

    store.fetch_all_products().await.unwrap();
    assert_eq!(store.get_by_id(ProductId::new(2)), Some(&product(2, 2.0)));
    assert!(store.get_by_id(ProductId::new(99)).is_none());

    assert_eq!(source.item_calls(), 0);
    assert_eq!(source.list_calls(), 1);
}

#[tokio::test]
async fn full_fetch_after_single_fetch_keeps_one_entry_per_id() {
    let source = CountingSource::new(products(3));
    let mut store = CatalogStore::new(source.clone());

    store.fetch_product_by_id(ProductId::new(2)).await.unwrap();
    store.fetch_all_products().await.unwrap();

    let ids: Vec<u64> = store.products().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn app_stores_initialize_from_seed_source() {
    let mut app = AppStores::new(StaticProductSource::seeded(), Currency::USD);
    assert!(!app.is_initialized());

    app.initialize().await.unwrap();
    assert!(app.is_initialized());

    let backpack = app.catalog.fetch_product_by_id(ProductId::new(1)).await.unwrap();
    app.cart.add_to_cart(backpack.clone());
    app.cart.add_to_cart(backpack);

    assert_eq!(app.cart.total().amount_cents, 21990);
}
