use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;
use crate::data::response::RawCategoryList;
use crate::domain::FetchError;

/// Something that can produce the raw category list.
#[async_trait]
pub trait CategorySource: Send + Sync {
    /// Perform one fetch. No retries.
    async fn fetch(&self) -> Result<RawCategoryList, FetchError>;
}

/// Fetches the category list over HTTP with a single `GET`.
pub struct RemoteCategorySource {
    client: Client,
    url: String,
}

impl RemoteCategorySource {
    /// Build a source for the endpoint described by `config`.
    ///
    /// Timeouts are only applied when configured; otherwise the client
    /// defaults are kept.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let url = config.categories_url();

        let mut builder = Client::builder();
        if let Some(secs) = config.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder.build().map_err(|source| FetchError::Network {
            url: url.clone(),
            source,
        })?;

        Ok(Self { client, url })
    }

    /// The endpoint this source requests.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CategorySource for RemoteCategorySource {
    async fn fetch(&self) -> Result<RawCategoryList, FetchError> {
        tracing::debug!(url = %self.url, "Requesting category list");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network {
                url: self.url.clone(),
                source,
            })?;

        tracing::debug!(status = %status, bytes = body.len(), "Category list received");
        tracing::trace!(body = %String::from_utf8_lossy(&body), "Category list body");

        RawCategoryList::from_slice(&body)
    }
}
