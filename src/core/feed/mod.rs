pub mod fetcher;
pub mod types;

use fetcher::{fetch_source_feeds_with_retry, FetchError};
use types::SourceFeed;

use super::config::{validate_config, ClientConfig, ConfigError};

/// Wraps the single GET against `/api/feeds`.
///
/// Every call to [`FeedService::fetch_feeds`] is one fresh request; nothing is cached.
#[derive(Debug, Clone)]
pub struct FeedService {
    client: reqwest::Client,
    feeds_url: String,
    max_retries: usize,
}

impl FeedService {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        validate_config(config)?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            feeds_url: config.feeds_url(),
            max_retries: config.max_retries,
        })
    }

    pub fn feeds_url(&self) -> &str {
        &self.feeds_url
    }

    pub async fn fetch_feeds(&self) -> Result<Vec<SourceFeed>, FetchError> {
        log::debug!("GET {}", self.feeds_url);
        fetch_source_feeds_with_retry(&self.client, &self.feeds_url, self.max_retries).await
    }
}
