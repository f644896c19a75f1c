//! Remote product source for the fake store.
//!
//! Provides the seam the catalog stores fetch through, plus its two
//! implementations:
//!
//! - `HttpProductSource` - the remote product API over HTTP
//! - `StaticProductSource` - a fixed in-memory list (offline / seed catalog)
//!
//! # Example
//!
//! ```rust,ignore
//! use fakestore_data::{HttpProductSource, ProductSource, SourceConfig};
//!
//! let source = HttpProductSource::new(SourceConfig::default())?;
//! let products = source.fetch_products().await?;
//! let backpack = source.fetch_product(1.into()).await?;
//! ```

mod config;
mod error;
mod http;
mod source;

pub use config::{SourceConfig, TimeoutConfig, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use http::HttpProductSource;
pub use source::{ProductSource, StaticProductSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchError, HttpProductSource, ProductSource, SourceConfig, StaticProductSource};
}
