//! source::mock
//!
//! In-memory manifest source for deterministic testing.
//!
//! # Design
//!
//! Documents are registered by URL. Unregistered URLs answer with HTTP 404,
//! and a URL can be configured to fail with any [`SourceError`]. Every
//! request is recorded so tests can check what was (or was not) fetched.
//!
//! # Example
//!
//! ```
//! use ros2_repos_compare::source::mock::MockSource;
//! use ros2_repos_compare::source::ManifestSource;
//!
//! # tokio_test::block_on(async {
//! let source = MockSource::new().with_document("http://x/ros2.repos", "repositories: {}");
//!
//! let text = source.fetch_text("http://x/ros2.repos").await.unwrap();
//! assert_eq!(text, "repositories: {}");
//! assert!(source.fetch_text("http://x/missing").await.is_err());
//! assert_eq!(source.requests().len(), 2);
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{ManifestSource, SourceError};

/// Mock source for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    inner: Arc<Mutex<MockSourceInner>>,
}

#[derive(Debug, Default)]
struct MockSourceInner {
    /// Document bodies by URL.
    documents: HashMap<String, String>,
    /// Forced failures by URL.
    failures: HashMap<String, SourceError>,
    /// Requested URLs, in order.
    requests: Vec<String>,
}

impl MockSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document body for a URL.
    pub fn with_document(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.lock().documents.insert(url.into(), body.into());
        self
    }

    /// Make requests for a URL fail with the given error.
    pub fn fail_on(self, url: impl Into<String>, error: SourceError) -> Self {
        self.lock().failures.insert(url.into(), error);
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockSourceInner> {
        // A poisoned lock only means another test thread panicked mid-request
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record a request and produce its response.
    fn respond(&self, url: &str) -> Result<String, SourceError> {
        let mut inner = self.lock();
        inner.requests.push(url.to_string());

        if let Some(error) = inner.failures.get(url) {
            return Err(error.clone());
        }

        inner
            .documents
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

#[async_trait]
impl ManifestSource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        self.respond(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_url_is_404() {
        let source = MockSource::new();
        let err = source.fetch_text("http://x/y").await.unwrap_err();
        assert_eq!(
            err,
            SourceError::Status {
                url: "http://x/y".to_string(),
                status: 404
            }
        );
    }

    #[tokio::test]
    async fn failure_wins_over_document() {
        let error = SourceError::Network {
            url: "http://x/y".to_string(),
            message: "connection refused".to_string(),
        };
        let source = MockSource::new()
            .with_document("http://x/y", "body")
            .fail_on("http://x/y", error.clone());

        assert_eq!(source.fetch_text("http://x/y").await.unwrap_err(), error);
    }

    #[tokio::test]
    async fn clones_share_requests() {
        let source = MockSource::new().with_document("http://x/y", "body");
        let clone = source.clone();
        clone.fetch_text("http://x/y").await.unwrap();
        assert_eq!(source.requests(), vec!["http://x/y".to_string()]);
    }
}
