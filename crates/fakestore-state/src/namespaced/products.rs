//! Products module: catalog mutations and fetch actions.

use std::convert::Infallible;

use fakestore_commerce::catalog::{Catalog, Product};
use fakestore_commerce::ProductId;
use fakestore_data::{FetchError, ProductSource};

use super::{ActionContext, Module, Named};

/// Namespace marker for the products module.
#[derive(Debug, Clone, Copy)]
pub struct ProductsModule;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductsMutation {
    /// Replace the whole catalog.
    SetProducts(Vec<Product>),
    /// Insert one product, replacing a record with the same id.
    AddProduct(Product),
}

impl Named for ProductsMutation {
    fn name(&self) -> &'static str {
        match self {
            ProductsMutation::SetProducts(_) => "setProducts",
            ProductsMutation::AddProduct(_) => "addProduct",
        }
    }
}

impl Module for ProductsModule {
    const NAMESPACE: &'static str = "products";
    type State = Catalog;
    type Mutation = ProductsMutation;
    type Error = Infallible;

    fn apply(catalog: &mut Catalog, mutation: ProductsMutation) -> Result<(), Infallible> {
        match mutation {
            ProductsMutation::SetProducts(products) => catalog.replace_all(products),
            ProductsMutation::AddProduct(product) => {
                catalog.upsert(product);
            }
        }
        Ok(())
    }
}

fn commit(ctx: &mut ActionContext<'_, ProductsModule>, mutation: ProductsMutation) {
    ctx.commit(mutation).unwrap_or_else(|never| match never {})
}

/// Fetch every product and replace the catalog. Failures are logged and returned.
pub async fn fetch_products<S>(
    ctx: &mut ActionContext<'_, ProductsModule>,
    source: &S,
) -> Result<Vec<Product>, FetchError>
where
    S: ProductSource + ?Sized,
{
    match source.fetch_products().await {
        Ok(products) => {
            commit(ctx, ProductsMutation::SetProducts(products.clone()));
            Ok(products)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching products");
            Err(e)
        }
    }
}

/// Return a cached product, or fetch and cache it. Failures are logged and returned.
pub async fn fetch_product_by_id<S>(
    ctx: &mut ActionContext<'_, ProductsModule>,
    source: &S,
    id: ProductId,
) -> Result<Product, FetchError>
where
    S: ProductSource + ?Sized,
{
    if let Some(product) = get_by_id(ctx.state(), id) {
        return Ok(product.clone());
    }

    match source.fetch_product(id).await {
        Ok(product) => {
            commit(ctx, ProductsMutation::AddProduct(product.clone()));
            Ok(product)
        }
        Err(e) => {
            tracing::error!(product_id = %id, error = %e, "Error fetching product");
            Err(e)
        }
    }
}

/// Look up a known product. Never fetches.
pub fn get_by_id(catalog: &Catalog, id: ProductId) -> Option<&Product> {
    catalog.get(id)
}

/// Number of known products.
pub fn count(catalog: &Catalog) -> usize {
    catalog.len()
}
