//! Session command, driven through the single namespaced store.

use anyhow::{Context as _, Result};
use fakestore_state::namespaced::{CartAction, Store};
use serde_json::json;

use super::ops::CartOp;
use super::SessionArgs;
use crate::context::Context;

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.config.store.currency;
    let mut store = Store::new(ctx.product_source()?, currency);

    let spinner = ctx.output.spinner("Initializing store...");
    let result = store.initialize_app().await;
    spinner.finish_and_clear();
    result.context("Failed to initialize store")?;

    for op in &args.ops {
        let action = match *op {
            CartOp::Add(id) => {
                let product = store
                    .fetch_product_by_id(id)
                    .await
                    .with_context(|| format!("Failed to load product {}", id))?;
                CartAction::AddToCart(product)
            }
            CartOp::Remove(id) => CartAction::RemoveFromCart(id),
            CartOp::Clear(id) => CartAction::ClearCart(id),
            CartOp::ClearAll => CartAction::ClearAllCart,
        };
        store
            .dispatch(action)
            .with_context(|| format!("Failed to apply {}", op))?;
    }

    let totals = store.cart().totals();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "items": store.cart_items(),
            "totals": totals,
            "journal": store.journal(),
        }));
        return Ok(());
    }

    ctx.output.header("Mutations");
    for (n, name) in store.journal().iter().enumerate() {
        ctx.output.kv(&format!("{:>3}", n + 1), name);
    }

    ctx.output.header("Cart");
    ctx.output.cart(store.cart_items(), &totals, currency);
    Ok(())
}
