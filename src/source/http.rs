//! source::http
//!
//! HTTP manifest source.
//!
//! Plain unauthenticated GETs with a fixed `User-Agent`. Timeouts are left at
//! the client defaults and non-2xx responses are errors.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use super::traits::{ManifestSource, SourceError};

/// User-Agent header value for requests.
const USER_AGENT_VALUE: &str = concat!("ros2-repos-compare/", env!("CARGO_PKG_VERSION"));

/// Fetches manifests over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSource {
    /// Create a source with a fresh client.
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a source around an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }
}

#[async_trait]
impl ManifestSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        debug!(url, "fetching");

        let response = self
            .client
            .get(url)
            .headers(Self::headers())
            .send()
            .await
            .map_err(|e| SourceError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| SourceError::Network {
            url: url.to_string(),
            message: format!("failed to read response body: {}", e),
        })?;

        debug!(url, bytes = text.len(), "fetched");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_crate() {
        assert!(USER_AGENT_VALUE.starts_with("ros2-repos-compare/"));
        let headers = HttpSource::headers();
        assert_eq!(
            headers.get(USER_AGENT).unwrap().to_str().unwrap(),
            USER_AGENT_VALUE
        );
    }

    #[tokio::test]
    async fn invalid_url_is_network_error() {
        let source = HttpSource::new();
        let err = source.fetch_text("not a url").await.unwrap_err();
        assert!(matches!(err, SourceError::Network { .. }));
        assert_eq!(err.url(), "not a url");
    }
}
