mod core;

pub use crate::core::config::{validate_config, ClientConfig, ConfigError, DEFAULT_BASE_URL, FEEDS_PATH};
pub use crate::core::feed::fetcher::FetchError;
pub use crate::core::feed::types::{FeedItem, SourceFeed};
pub use crate::core::feed::FeedService;
pub use crate::core::view::render::{render_json, render_text, RenderError, DEFAULT_WIDTH};
pub use crate::core::view::{AppComponent, ViewState};

use clap::Parser;
use std::future::Future;
use std::process::ExitCode;

const INTERRUPTED_EXIT_CODE: u8 = 130;

#[derive(Debug, Parser)]
#[command(name = "rss-ui", version, about = "Fetch and print the feeds served by /api/feeds")]
struct Cli {
    /// Origin of the feed server; `/api/feeds` is appended.
    #[arg(long, env = "RSS_UI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Per-request timeout. Unset means wait indefinitely.
    #[arg(long, env = "RSS_UI_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
    /// Retries for transport errors and 5xx responses.
    #[arg(long, env = "RSS_UI_MAX_RETRIES", default_value_t = 0)]
    max_retries: usize,
    /// Wrap width for item descriptions.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Print the feeds as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            max_retries: self.max_retries,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Rendered,
    Interrupted,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("async runtime failed to start: {0}")]
    Runtime(#[from] std::io::Error),
}

pub fn run() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let outcome = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(RunError::from)
        .and_then(|runtime| runtime.block_on(execute(cli)));

    match outcome {
        Ok(Outcome::Rendered) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => ExitCode::from(INTERRUPTED_EXIT_CODE),
        // the view has already logged the failure
        Err(RunError::Fetch(_)) => ExitCode::FAILURE,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<Outcome, RunError> {
    execute_until(cli, tokio::signal::ctrl_c()).await
}

/// Runs the view until it is populated or `interrupt` resolves with `Ok`.
///
/// An `Err` from `interrupt` (no signal handler) disables that branch.
async fn execute_until<F>(cli: Cli, interrupt: F) -> Result<Outcome, RunError>
where
    F: Future<Output = std::io::Result<()>>,
{
    let service = FeedService::new(&cli.client_config())?;
    let mut app = AppComponent::new(service);

    tokio::select! {
        result = app.init() => result?,
        Ok(()) = interrupt => {
            log::warn!("interrupted before the feeds arrived");
            return Ok(Outcome::Interrupted);
        }
    }

    let feeds = app.feeds().unwrap_or_default();
    let mut out = std::io::stdout().lock();
    if cli.json {
        render_json(feeds, &mut out)?;
    } else {
        render_text(feeds, cli.width, &mut out)?;
    }
    Ok(Outcome::Rendered)
}
