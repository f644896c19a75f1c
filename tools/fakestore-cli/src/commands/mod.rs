//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod ops;
pub mod products;
pub mod session;

use clap::{Args, Subcommand};
use fakestore_commerce::ProductId;

use ops::CartOp;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list products in this category.
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations applied in order: add:<id>, remove:<id>, clear:<id>, clear-all.
    #[arg(required = true)]
    pub ops: Vec<CartOp>,

    /// Load the full catalog before applying operations.
    #[arg(long)]
    pub preload: bool,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Operations applied in order: add:<id>, remove:<id>, clear:<id>, clear-all.
    #[arg(required = true)]
    pub ops: Vec<CartOp>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
