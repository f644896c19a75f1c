//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[source]");
    ctx.output.kv("base_url", &ctx.config.source.base_url);
    ctx.output.kv("user_agent", &ctx.config.source.user_agent);
    ctx.output
        .kv("connect_timeout_ms", &ctx.config.source.timeout.connect_ms.to_string());
    ctx.output
        .kv("total_timeout_ms", &ctx.config.source.timeout.total_ms.to_string());

    ctx.output.info("[store]");
    ctx.output.kv("currency", ctx.config.store.currency.code());
    ctx.output.kv("offline", &ctx.config.store.offline.to_string());

    ctx.output.info("[logging]");
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());
    ctx.output.kv("level", &ctx.config.logging.level);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !overwrite {
            ctx.output.warn("Left existing config untouched.");
            return Ok(());
        }
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}
