//! source::traits
//!
//! Trait for fetching manifest documents.
//!
//! # Design
//!
//! The trait is async because fetching involves network I/O. A run makes
//! exactly two calls, one per manifest, and nothing is retried.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from fetching a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Connection, DNS, TLS, or body read failure.
    #[error("failed to fetch {url}: {message}")]
    Network {
        /// Requested URL
        url: String,
        /// Underlying error
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },
}

impl SourceError {
    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            SourceError::Network { url, .. } | SourceError::Status { url, .. } => url,
        }
    }
}

/// A place manifest documents can be read from.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Short name of the source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the document at `url` as text.
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError>;
}
