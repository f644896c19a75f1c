//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use fakestore_state::stores::CatalogStore;

use super::{ProductArgs, ProductsArgs};
use crate::context::Context;
use crate::output::truncate;

/// Run the products command.
pub async fn run_list(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut store = CatalogStore::new(ctx.product_source()?);

    let spinner = ctx.output.spinner("Loading products...");
    let result = store.fetch_all_products().await.map(|p| p.len());
    spinner.finish_and_clear();
    let loaded = result.context("Failed to load products")?;
    ctx.output.debug(&format!("Loaded {} products", loaded));

    let products: Vec<_> = match args.category.as_deref() {
        Some(category) => store.catalog().in_category(category).collect(),
        None => store.products().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products found.");
        let categories = store.catalog().categories();
        if !categories.is_empty() {
            ctx.output.info(&format!("Categories: {}", categories.join(", ")));
        }
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    let widths = [6, 44, 10, 18];
    ctx.output.table_row(&["ID", "TITLE", "PRICE", "CATEGORY"], &widths);
    for product in products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &truncate(&product.title, widths[1]),
                &product.unit_price(ctx.config.store.currency).display(),
                &product.category,
            ],
            &widths,
        );
    }

    Ok(())
}

/// Run the product command.
pub async fn run_show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = CatalogStore::new(ctx.product_source()?);

    let spinner = ctx.output.spinner(&format!("Loading product {}...", args.id));
    let result = store.fetch_product_by_id(args.id).await;
    spinner.finish_and_clear();
    let product = result.with_context(|| format!("Failed to load product {}", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output
        .kv("price", &product.unit_price(ctx.config.store.currency).display());
    ctx.output.kv("category", &product.category);
    ctx.output.kv(
        "rating",
        &format!("{:.1} ({} ratings)", product.rating.rate, product.rating.count),
    );
    ctx.output.kv("image", &product.image);
    if !product.description.is_empty() {
        println!("\n  {}", product.description);
    }

    Ok(())
}
