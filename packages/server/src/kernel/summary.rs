//! Client for the optional summary microservice.
//!
//! The service takes the three extracted terms and returns a one-line
//! summary used to flavor the generation prompt. It is strictly
//! best-effort: any fault, including the service not being configured at
//! all, yields a fallback sentence instead of an error.

use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    summary: String,
}

/// HTTP client for the summary microservice.
pub struct SummaryClient {
    client: reqwest::Client,
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl SummaryClient {
    /// Create a client. `endpoint = None` means the service is not
    /// deployed and every lookup takes the fallback path.
    pub fn new(endpoint: Option<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(5))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint,
            api_key,
        }
    }

    /// Whether an endpoint was configured at all.
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Fetch a summary for the three terms. Never fails; any fault
    /// produces the fallback sentence.
    pub async fn get_summary(&self, terms: &[String; 3]) -> String {
        let Some(endpoint) = &self.endpoint else {
            debug!("summary service not configured, using fallback");
            return fallback_summary(terms);
        };

        match self.request_summary(endpoint, terms).await {
            Ok(summary) => summary,
            Err(reason) => {
                warn!(reason = %reason, "summary service fault, using fallback");
                fallback_summary(terms)
            }
        }
    }

    async fn request_summary(&self, endpoint: &str, terms: &[String; 3]) -> Result<String, String> {
        let mut request = self.client.get(endpoint).query(&[
            ("one", terms[0].as_str()),
            ("two", terms[1].as_str()),
            ("three", terms[2].as_str()),
        ]);
        if let Some(key) = &self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("summary service returned {status}"));
        }

        let body: SummaryResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(body.summary)
    }
}

/// The sentence used whenever no real summary is available.
pub fn fallback_summary(terms: &[String; 3]) -> String {
    format!(
        "There's not much to say about {}, {}, {} but try anyway.",
        terms[0], terms[1], terms[2]
    )
}
