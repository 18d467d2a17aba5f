//! Test doubles for extraction without a network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::fetch::{FetchFailure, PageFetcher};

/// A fetcher that serves canned HTML per URL and counts calls.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    calls: Arc<AtomicUsize>,
}

impl StaticFetcher {
    /// Register a page body for a URL.
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// Shared call counter, for assertions.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| format!("no canned page for {url}").into())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// A fetcher that always fails, for retry-cap tests.
pub struct FailingFetcher {
    message: String,
    calls: Arc<AtomicUsize>,
}

impl FailingFetcher {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter, for assertions.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl PageFetcher for FailingFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.message.clone().into())
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Build a search-page HTML document: a title, then `nav` anchors
/// (navigation chrome), then `content` anchors (candidate terms).
pub fn search_page(title: &str, nav: &[&str], content: &[&str]) -> String {
    let mut body = String::new();
    for text in nav.iter().chain(content) {
        body.push_str(&format!("<a href=\"#\">{text}</a>\n"));
    }
    format!(
        "<!DOCTYPE html><html><head><title>{title}</title></head><body>{body}</body></html>"
    )
}
