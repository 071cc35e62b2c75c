use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const FEEDS_PATH: &str = "/api/feeds";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("timeout must be at least one second")]
    ZeroTimeout,
    #[error("http client could not be built: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub max_retries: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            max_retries: 0,
        }
    }
}

impl ClientConfig {
    pub fn feeds_url(&self) -> String {
        format!("{}{FEEDS_PATH}", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

pub fn validate_config(config: &ClientConfig) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
        url: config.base_url.clone(),
        reason: reason.to_string(),
    };
    let parsed = reqwest::Url::parse(config.base_url.trim())
        .map_err(|error| invalid(&error.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if !parsed.has_host() {
        return Err(invalid("missing host"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    if config.timeout_secs == Some(0) {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(())
}
