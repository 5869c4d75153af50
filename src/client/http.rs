use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::{ApiError, MovieApi};
use crate::config::ClientConfig;
use crate::provider::{decode_reply, MovieDetail, ProviderReply, SearchPage};

/// `reqwest`-backed client for the proxy's `/api` surface.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http_client: Client,
    base_url: Url,
}

impl ProxyClient {
    /// Build a client for the given base URL (e.g. `http://localhost:3001/api`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        // Joining segments below relies on no trailing empty segment.
        if let Ok(mut segments) = base_url.path_segments_mut() {
            segments.pop_if_empty();
        }

        let http_client = Client::builder().build()?;
        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn get_reply<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ProviderReply<T>, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(decode_reply(body)?)
    }
}

#[async_trait]
impl MovieApi for ProxyClient {
    #[instrument(skip(self), level = "debug")]
    async fn search(&self, query: &str, page: u32) -> Result<ProviderReply<SearchPage>, ApiError> {
        let url = self.endpoint(&["movies", "search"])?;
        let page = page.to_string();
        let request = self
            .http_client
            .get(url)
            .query(&[("query", query), ("page", page.as_str())]);
        self.get_reply(request).await
    }

    #[instrument(skip(self), level = "debug")]
    async fn details(&self, id: &str) -> Result<ProviderReply<MovieDetail>, ApiError> {
        let url = self.endpoint(&["movies", id])?;
        self.get_reply(self.http_client.get(url)).await
    }
}
