use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::{SecureString, UpstreamConfig};
use crate::proxy::error::ProxyError;

/// Relays lookups to the movie provider, adding the API key.
///
/// Bodies are returned as parsed JSON and otherwise untouched.
pub struct UpstreamClient {
    client: Client,
    base_url: Url,
    api_key: SecureString,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig, api_key: SecureString) -> Result<Self, ProxyError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|_| ProxyError::InvalidUpstreamUrl(config.base_url.clone()))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ProxyError::ClientBuild)?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Title search: `?s=<query>&page=<n>`.
    pub async fn search(&self, query: &str, page: u32) -> Result<Value, ProxyError> {
        let page = page.to_string();
        self.fetch(&[("s", query), ("page", page.as_str())]).await
    }

    /// Single title lookup: `?i=<id>`.
    pub async fn details(&self, id: &str) -> Result<Value, ProxyError> {
        self.fetch(&[("i", id)]).await
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> Result<Value, ProxyError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.expose())])
            .query(params)
            .send()
            .await
            // The URL carries the key; keep it out of error messages.
            .map_err(|e| ProxyError::Upstream(e.without_url()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProxyError::Upstream(e.without_url()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Upstream returned non-success status");
        }

        serde_json::from_slice(&bytes).map_err(|source| ProxyError::InvalidUpstreamBody {
            status: status.as_u16(),
            source,
        })
    }
}
