//! Typed errors for term extraction.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! distinguish a dead network from an empty search from a page with
//! nothing worth sampling.

use thiserror::Error;

/// Errors that can occur while extracting related terms.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The search page could not be fetched after the configured retries
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The search found nothing for this phrase
    #[error("no search results for: {query}")]
    NoResults { query: String },

    /// Sampling cap hit before three valid terms were accepted
    #[error("no three valid terms after {attempts} samples")]
    ValidationExhausted { attempts: usize },
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
