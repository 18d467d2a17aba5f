//! Page fetching seam.
//!
//! `PageFetcher` is the trait boundary between extraction logic and the
//! network, so tests can run against canned HTML (see [`crate::testing`]).

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Opaque fetch fault, wrapped into [`crate::ExtractError::Fetch`] by the caller.
pub type FetchFailure = Box<dyn std::error::Error + Send + Sync>;

/// Fetches an HTML document body for a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url` and return its body.
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure>;

    /// Fetcher name, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// HTTP fetcher over `reqwest` with an explicit request timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with a 10 second timeout and default user agent.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(10))
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "PitchForge/0.1".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        debug!(url = %url, "fetching search page");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "search page request failed");
                Box::new(e) as FetchFailure
            })?;

        let response = response.error_for_status().map_err(|e| {
            warn!(url = %url, error = %e, "search page returned error status");
            Box::new(e) as FetchFailure
        })?;

        response
            .text()
            .await
            .map_err(|e| Box::new(e) as FetchFailure)
    }

    fn name(&self) -> &str {
        "http"
    }
}
