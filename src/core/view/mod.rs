pub mod render;

use super::feed::fetcher::FetchError;
use super::feed::types::SourceFeed;
use super::feed::FeedService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Unpopulated,
    Populated,
}

/// The feed list view. Fetches once on [`AppComponent::init`] and keeps the result.
#[derive(Debug)]
pub struct AppComponent {
    feed_service: FeedService,
    feeds: Option<Vec<SourceFeed>>,
    initialized: bool,
}

impl AppComponent {
    pub fn new(feed_service: FeedService) -> Self {
        Self {
            feed_service,
            feeds: None,
            initialized: false,
        }
    }

    /// Issues the fetch. Only the first call on a component reaches the network.
    ///
    /// On failure `feeds` stays unset and the view stays [`ViewState::Unpopulated`].
    pub async fn init(&mut self) -> Result<(), FetchError> {
        if self.initialized {
            log::debug!("view already initialized, skipping fetch");
            return Ok(());
        }
        self.initialized = true;

        match self.feed_service.fetch_feeds().await {
            Ok(feeds) => {
                log::info!(
                    "loaded {} source feeds from {}",
                    feeds.len(),
                    self.feed_service.feeds_url()
                );
                self.feeds = Some(feeds);
                Ok(())
            }
            Err(error) => {
                log::warn!("fetching {} failed: {error}", self.feed_service.feeds_url());
                Err(error)
            }
        }
    }

    pub fn feeds(&self) -> Option<&[SourceFeed]> {
        self.feeds.as_deref()
    }

    pub fn state(&self) -> ViewState {
        if self.feeds.is_some() {
            ViewState::Populated
        } else {
            ViewState::Unpopulated
        }
    }
}
