//! Fake store CLI - browse the catalog and drive the cart stores.
//!
//! Commands:
//! - `fakestore products` - List the catalog
//! - `fakestore product <id>` - Show one product
//! - `fakestore cart <ops>` - Apply cart operations through the decentralized stores
//! - `fakestore session <ops>` - Apply cart operations through the namespaced store
//! - `fakestore config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, ConfigArgs, ProductArgs, ProductsArgs, SessionArgs};

/// Fake store CLI - browse products and fill a cart
#[derive(Parser)]
#[command(name = "fakestore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Serve the bundled catalog instead of calling the product API
    #[arg(long, global = true)]
    offline: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// Apply cart operations using the decentralized stores
    Cart(CartArgs),

    /// Apply cart operations using the namespaced store
    Session(SessionArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let mut ctx = context::Context::load(cli.config.as_deref(), output)?;
    if cli.offline {
        ctx.config.store.offline = true;
    }

    logging::init(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run_list(args, &ctx).await,
        Commands::Product(args) => commands::products::run_show(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Session(args) => commands::session::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
