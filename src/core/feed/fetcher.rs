use std::time::Duration;

use super::types::SourceFeed;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    #[error("response is not a list of source feeds: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    fn is_transient(&self) -> bool {
        matches!(self, FetchError::Request(_))
            || matches!(self, FetchError::HttpStatus(code) if *code >= 500)
    }
}

pub async fn fetch_source_feeds(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<SourceFeed>, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await?;
    let feeds = serde_json::from_slice(&body)?;
    Ok(feeds)
}

pub async fn fetch_source_feeds_with_retry(
    client: &reqwest::Client,
    url: &str,
    max_retries: usize,
) -> Result<Vec<SourceFeed>, FetchError> {
    let mut attempt = 0_usize;
    loop {
        match fetch_source_feeds(client, url).await {
            Ok(feeds) => return Ok(feeds),
            Err(err) => {
                if !err.is_transient() || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                log::warn!("fetching {url} failed ({err}), retry {attempt}/{max_retries}");
                tokio::time::sleep(Duration::from_millis(40 * attempt as u64)).await;
            }
        }
    }
}
