//! Client side of the proxy API.
//!
//! The store talks to the proxy only through [`MovieApi`], so tests
//! can substitute scripted implementations.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::provider::{MovieDetail, ProviderReply, SearchPage};

pub use http::ProxyClient;

/// Failures below the provider level: network, HTTP status, or body shape.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the response could not be read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Proxy answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Body was not the JSON shape the provider promises.
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Base URL cannot carry path segments.
    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Read operations offered by the proxy service.
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Fetch one page of title search results.
    async fn search(&self, query: &str, page: u32) -> Result<ProviderReply<SearchPage>, ApiError>;

    /// Fetch the full record for one title.
    async fn details(&self, id: &str) -> Result<ProviderReply<MovieDetail>, ApiError>;
}
