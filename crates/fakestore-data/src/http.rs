//! HTTP product source.

use async_trait::async_trait;
use fakestore_commerce::{catalog::Product, ProductId};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::{FetchError, ProductSource, SourceConfig};

/// Product source backed by the remote product API.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    config: SourceConfig,
}

impl HttpProductSource {
    /// Create a source from configuration.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(FetchError::InvalidUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .connect_timeout(config.timeout.connect())
            .timeout(config.timeout.total())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this source was built from.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// GET `url` and return the body, failing on any non-2xx status.
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let body = self.get_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        let products: Vec<Product> = self.get_json(&self.config.products_url()).await?;
        tracing::debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, FetchError> {
        let body = match self.get_bytes(&self.config.product_url(id)).await {
            Err(FetchError::Http { status: 404, .. }) => return Err(FetchError::NotFound(id)),
            other => other?,
        };

        // The public API answers unknown ids with 200 and an empty (or null) body.
        let product: Option<Product> = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            serde_json::from_slice(&body)?
        };

        product.ok_or(FetchError::NotFound(id))
    }
}
