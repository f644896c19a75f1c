//! Cart command, driven through the decentralized stores.

use anyhow::{Context as _, Result};
use fakestore_state::stores::AppStores;
use serde_json::json;

use super::ops::CartOp;
use super::CartArgs;
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.config.store.currency;
    let mut app = AppStores::new(ctx.product_source()?, currency);

    if args.preload {
        let spinner = ctx.output.spinner("Loading products...");
        let result = app.initialize().await;
        spinner.finish_and_clear();
        result.context("Failed to load products")?;
    }

    for op in &args.ops {
        ctx.output.debug(&format!("Applying {}", op));
        match *op {
            CartOp::Add(id) => {
                let product = app
                    .catalog
                    .fetch_product_by_id(id)
                    .await
                    .with_context(|| format!("Failed to load product {}", id))?;
                app.cart.add_to_cart(product);
            }
            CartOp::Remove(id) => app.cart.remove_from_cart(id),
            CartOp::Clear(id) => app.cart.clear_cart(id),
            CartOp::ClearAll => app.cart.clear_all_cart(),
        }
    }

    let totals = app.cart.totals();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": app.cart.items(),
            "totals": totals,
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.cart(app.cart.items(), &totals, currency);
    Ok(())
}
