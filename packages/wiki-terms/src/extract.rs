//! Related-term extraction from a search-results page.
//!
//! The search page for a phrase links to everything the encyclopedia
//! considers adjacent to it. We grab all anchor texts, skip the leading
//! navigation chrome, and sample at random until three anchors survive
//! the validity filter. Sampling is bounded, as is the fetch retry loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scraper::{Html, Selector};
use tracing::{debug, info, warn};

use crate::error::{ExtractError, Result};
use crate::fetch::PageFetcher;
use crate::lang::Language;
use crate::validator::is_valid;

/// Leading anchors on a search page are navigation chrome, not results.
const NAV_LINK_COUNT: usize = 10;

/// Default number of fetch attempts before giving up.
const DEFAULT_FETCH_ATTEMPTS: usize = 3;

/// Default number of random samples before declaring exhaustion.
const DEFAULT_SAMPLE_ATTEMPTS: usize = 200;

/// Extracts three validated related terms for a phrase.
pub struct TermExtractor<F: PageFetcher> {
    fetcher: F,
    base_template: String,
    fetch_attempts: usize,
    sample_attempts: usize,
    seed: Option<u64>,
}

impl<F: PageFetcher> TermExtractor<F> {
    /// Create an extractor over the given fetcher, targeting Wikipedia.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            base_template: "https://{lang}.wikipedia.org/w/index.php?search=".to_string(),
            fetch_attempts: DEFAULT_FETCH_ATTEMPTS,
            sample_attempts: DEFAULT_SAMPLE_ATTEMPTS,
            seed: None,
        }
    }

    /// Override the search base URL. `{lang}` is replaced with the
    /// language code. Used to point tests at canned pages.
    pub fn with_base_template(mut self, template: impl Into<String>) -> Self {
        self.base_template = template.into();
        self
    }

    /// Override the fetch retry cap.
    pub fn with_fetch_attempts(mut self, attempts: usize) -> Self {
        self.fetch_attempts = attempts;
        self
    }

    /// Override the sampling attempt cap.
    pub fn with_sample_attempts(mut self, attempts: usize) -> Self {
        self.sample_attempts = attempts;
        self
    }

    /// Seed the sampler for deterministic tests.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The search URL for a phrase in a language.
    pub fn search_url(&self, phrase: &str, language: Language) -> String {
        let base = self.base_template.replace("{lang}", language.code());
        format!("{}{}", base, urlencoding::encode(phrase))
    }

    /// Fetch the search page and extract three validated terms, in
    /// acceptance order.
    pub async fn extract_terms(&self, phrase: &str, language: Language) -> Result<[String; 3]> {
        let url = self.search_url(phrase, language);
        let html = self.fetch_with_retries(&url).await?;
        let terms = self.pick_terms(&html, phrase)?;
        info!(phrase = %phrase, terms = ?terms, "extracted related terms");
        Ok(terms)
    }

    async fn fetch_with_retries(&self, url: &str) -> Result<String> {
        let mut last_error = None;
        for attempt in 1..=self.fetch_attempts {
            match self.fetcher.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    warn!(
                        url = %url,
                        attempt,
                        fetcher = self.fetcher.name(),
                        error = %e,
                        "search page fetch failed"
                    );
                    last_error = Some(e);
                }
            }
        }
        Err(ExtractError::Fetch {
            url: url.to_string(),
            source: last_error
                .unwrap_or_else(|| "no fetch attempts were made".into()),
        })
    }

    fn pick_terms(&self, html: &str, query: &str) -> Result<[String; 3]> {
        // Static selectors, cannot fail to parse
        let title_selector = Selector::parse("title").expect("valid selector");
        let anchor_selector = Selector::parse("a").expect("valid selector");

        let document = Html::parse_document(html);

        let title: String = document
            .select(&title_selector)
            .next()
            .map(|t| t.text().collect())
            .unwrap_or_default();
        if title.contains("Search results") {
            return Err(ExtractError::NoResults {
                query: query.to_string(),
            });
        }

        let anchors: Vec<String> = document
            .select(&anchor_selector)
            .map(|a| a.text().collect::<String>().trim().to_string())
            .collect();
        debug!(count = anchors.len(), "collected page anchors");

        if anchors.len() <= NAV_LINK_COUNT {
            return Err(ExtractError::ValidationExhausted { attempts: 0 });
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut terms: Vec<String> = Vec::with_capacity(3);
        for _ in 0..self.sample_attempts {
            let candidate = &anchors[rng.gen_range(NAV_LINK_COUNT..anchors.len())];
            if !is_valid(candidate) {
                continue;
            }
            terms.push(candidate.clone());
            if terms.len() == 3 {
                let mut iter = terms.into_iter();
                return Ok([
                    iter.next().expect("three terms"),
                    iter.next().expect("three terms"),
                    iter.next().expect("three terms"),
                ]);
            }
        }

        Err(ExtractError::ValidationExhausted {
            attempts: self.sample_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{search_page, FailingFetcher, StaticFetcher};

    fn extractor(fetcher: StaticFetcher) -> TermExtractor<StaticFetcher> {
        TermExtractor::new(fetcher)
            .with_base_template("https://{lang}.test/search=")
            .with_seed(7)
    }

    #[test]
    fn builds_encoded_search_urls() {
        let e = extractor(StaticFetcher::default());
        assert_eq!(
            e.search_url("deep sea", Language::Spanish),
            "https://es.test/search=deep%20sea"
        );
    }

    #[tokio::test]
    async fn extracts_three_valid_terms_past_navigation() {
        let nav: Vec<&str> = vec![
            "Log in", "Talk", "edit", "Special Pages", "Privacy Policy",
            "Mobile view", "Contributions", "Related changes", "What links here",
            "Page information",
        ];
        let content = vec!["Cephalopod", "Mollusc", "Ocean"];
        let fetcher = StaticFetcher::default().with_page(
            "https://en.test/search=octopus",
            search_page("Octopus", &nav, &content),
        );

        let terms = extractor(fetcher)
            .extract_terms("octopus", Language::English)
            .await
            .unwrap();

        for term in &terms {
            assert!(is_valid(term));
            assert!(content.contains(&term.as_str()));
        }
    }

    #[tokio::test]
    async fn never_returns_navigation_chrome() {
        // Only one valid anchor past the nav range; all three accepted
        // terms must be it.
        let nav: Vec<&str> = vec!["x"; 10];
        let fetcher = StaticFetcher::default().with_page(
            "https://en.test/search=kelp",
            search_page("Kelp", &nav, &["edit", "Kelp forest", "Talk"]),
        );

        let terms = extractor(fetcher)
            .extract_terms("kelp", Language::English)
            .await
            .unwrap();
        assert_eq!(terms, ["Kelp forest", "Kelp forest", "Kelp forest"].map(String::from));
    }

    #[tokio::test]
    async fn no_results_title_is_an_error() {
        let fetcher = StaticFetcher::default().with_page(
            "https://en.test/search=zzzz",
            search_page("Search results - Wikipedia", &["x"; 10], &["Anything"]),
        );

        let err = extractor(fetcher)
            .extract_terms("zzzz", Language::English)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::NoResults { query } if query == "zzzz"));
    }

    #[tokio::test]
    async fn sampling_cap_surfaces_exhaustion() {
        // Everything past the nav range is invalid
        let fetcher = StaticFetcher::default().with_page(
            "https://en.test/search=void",
            search_page("Void", &["x"; 10], &["edit", "Talk", "1234"]),
        );

        let err = extractor(fetcher)
            .with_sample_attempts(50)
            .extract_terms("void", Language::English)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExtractError::ValidationExhausted { attempts: 50 }
        ));
    }

    #[tokio::test]
    async fn too_few_anchors_is_exhaustion() {
        let fetcher = StaticFetcher::default().with_page(
            "https://en.test/search=tiny",
            search_page("Tiny", &["Log in"], &[]),
        );

        let err = extractor(fetcher)
            .extract_terms("tiny", Language::English)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::ValidationExhausted { .. }));
    }

    #[tokio::test]
    async fn fetch_failures_are_retried_then_surfaced() {
        let fetcher = FailingFetcher::new("connection refused");
        let calls = fetcher.calls();

        let err = TermExtractor::new(fetcher)
            .with_fetch_attempts(3)
            .extract_terms("octopus", Language::English)
            .await
            .unwrap_err();

        assert!(matches!(err, ExtractError::Fetch { .. }));
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 3);
    }
}
