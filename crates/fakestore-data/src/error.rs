//! Product fetch error types.

use fakestore_commerce::ProductId;
use thiserror::Error;

/// Errors that can occur when retrieving products from a source.
///
/// Every variant is a network failure from the caller's point of view: the
/// catalog is left untouched and the error is handed back unchanged.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success HTTP status.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// The source answered but holds no product with this id.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The request did not complete in time.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not connect to the source.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The body was not a valid product payload.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    /// HTTP status of the failure, when the source answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        if e.is_timeout() {
            FetchError::Timeout(url)
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}
