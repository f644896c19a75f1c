//! Product source configuration.

use std::time::Duration;

use fakestore_commerce::ProductId;
use serde::{Deserialize, Serialize};

/// Default product API.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Where and how to reach the product API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL; `/products` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeouts.
    #[serde(default)]
    pub timeout: TimeoutConfig,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("fakestore/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout: TimeoutConfig::default(),
        }
    }
}

impl SourceConfig {
    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeouts.
    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the full product listing.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.trim_end_matches('/'))
    }

    /// URL of a single product.
    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.products_url(), id)
    }
}

/// Timeout configuration for product requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Connection timeout in milliseconds.
    #[serde(default = "default_connect_ms")]
    pub connect_ms: u64,
    /// Total request timeout in milliseconds.
    #[serde(default = "default_total_ms")]
    pub total_ms: u64,
}

fn default_connect_ms() -> u64 {
    2_000
}

fn default_total_ms() -> u64 {
    10_000
}

impl TimeoutConfig {
    /// Create from a single total timeout; connecting gets a quarter of it.
    pub fn from_total(total: Duration) -> Self {
        let total_ms = u64::try_from(total.as_millis()).unwrap_or(u64::MAX);
        Self {
            connect_ms: total_ms / 4,
            total_ms,
        }
    }

    /// Connection timeout.
    pub fn connect(&self) -> Duration {
        Duration::from_millis(self.connect_ms)
    }

    /// Total request timeout.
    pub fn total(&self) -> Duration {
        Duration::from_millis(self.total_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: default_connect_ms(),
            total_ms: default_total_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let config = SourceConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.products_url(), "http://localhost:8080/products");
        assert_eq!(config.product_url(ProductId::new(7)), "http://localhost:8080/products/7");
    }

    #[test]
    fn test_timeout_from_total() {
        let timeout = TimeoutConfig::from_total(Duration::from_secs(2));
        assert_eq!(timeout.connect(), Duration::from_millis(500));
        assert_eq!(timeout.total(), Duration::from_secs(2));
    }

    #[test]
    fn test_timeout_from_huge_total_saturates() {
        let timeout = TimeoutConfig::from_total(Duration::MAX);
        assert_eq!(timeout.total_ms, u64::MAX);
        assert_eq!(timeout.connect_ms, u64::MAX / 4);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SourceConfig = serde_json::from_str(r#"{"timeout": {"total_ms": 500}}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout.connect_ms, 2_000);
        assert_eq!(config.timeout.total_ms, 500);
    }
}
