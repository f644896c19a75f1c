//! CLI configuration.

use anyhow::{Context, Result};
use fakestore_commerce::Currency;
use fakestore_data::SourceConfig;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `source.base_url`.
pub const API_URL_ENV: &str = "FAKESTORE_API_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Product API settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.source.base_url = url;
            }
        }
        self
    }
}

/// Store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency carts are priced in.
    #[serde(default)]
    pub currency: Currency,

    /// Serve the bundled catalog instead of calling the product API.
    #[serde(default)]
    pub offline: bool,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_level(),
        }
    }
}

/// Generate a default fakestore.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Fake store configuration

[source]
base_url = "{base_url}"

[source.timeout]
connect_ms = 2000
total_ms = 10000

[store]
currency = "USD"
# Serve the bundled catalog instead of calling the product API.
offline = false

[logging]
# "human" or "json"
format = "human"
level = "warn"
"#,
        base_url = fakestore_data::DEFAULT_BASE_URL
    )
}
