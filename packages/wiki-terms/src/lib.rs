//! Related-term discovery for pitch generation.
//!
//! Given a phrase and a language, fetch the corresponding Wikipedia
//! search-results page and sample three anchor texts that survive a
//! boilerplate filter. Those terms feed the pitch prompt.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wiki_terms::{HttpFetcher, Language, TermExtractor};
//!
//! let extractor = TermExtractor::new(HttpFetcher::new());
//! let terms = extractor.extract_terms("octopus", Language::English).await?;
//! let prompt = wiki_terms::build_prompt(&terms, Language::English, None);
//! ```
//!
//! # Modules
//!
//! - [`extract`] - The page-sampling extractor
//! - [`validator`] - Anchor-text validity filter
//! - [`prompt`] - Generation prompt composition
//! - [`fetch`] - `PageFetcher` seam and HTTP implementation
//! - [`testing`] - Canned-page fetchers for tests

pub mod error;
pub mod extract;
pub mod fetch;
pub mod lang;
pub mod prompt;
pub mod testing;
pub mod validator;

pub use error::{ExtractError, Result};
pub use extract::TermExtractor;
pub use fetch::{HttpFetcher, PageFetcher};
pub use lang::Language;
pub use prompt::build_prompt;
pub use validator::is_valid;
