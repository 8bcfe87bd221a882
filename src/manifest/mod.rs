//! manifest
//!
//! Parsing and schema validation of the two manifest documents.
//!
//! # Modules
//!
//! - [`ros2_repos`] - The pinned `ros2.repos` repository list
//! - [`rosdistro`] - The rosdistro `distribution.yaml` registry
//! - [`schema`] - Path-tracking shape checks over YAML trees
//!
//! # Errors
//!
//! Every error carries the URL the document came from. Schema errors also
//! carry the path of the offending field.
//!
//! # Example
//!
//! ```
//! use ros2_repos_compare::manifest::{parse_ros2_repos, ManifestError};
//!
//! let text = "repositories:\n  ros2/rcl:\n    type: git\n    version: 5.3.2\n";
//! let err = parse_ros2_repos(text, "https://example.com/ros2.repos").unwrap_err();
//! assert!(matches!(err, ManifestError::Schema { .. }));
//! assert!(err.to_string().contains("https://example.com/ros2.repos"));
//! assert!(err.to_string().contains("repositories.ros2/rcl.url"));
//! ```

pub mod ros2_repos;
pub mod rosdistro;
pub mod schema;

pub use ros2_repos::{Ros2Repo, Ros2Repos};
pub use rosdistro::RosDistro;
pub use schema::FieldPath;

use serde_yaml::Value;
use thiserror::Error;

/// Errors from parsing a manifest document.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The document is not valid YAML.
    #[error("failed to parse YAML from {url}: {source}")]
    Yaml {
        url: String,
        source: serde_yaml::Error,
    },

    /// The document does not match the expected schema.
    #[error("schema validation failed for {url} at `{path}`: {message}")]
    Schema {
        url: String,
        path: FieldPath,
        message: String,
    },
}

impl ManifestError {
    /// URL of the offending document.
    pub fn url(&self) -> &str {
        match self {
            ManifestError::Yaml { url, .. } | ManifestError::Schema { url, .. } => url,
        }
    }
}

fn parse_yaml(text: &str, url: &str) -> Result<Value, ManifestError> {
    serde_yaml::from_str(text).map_err(|source| ManifestError::Yaml {
        url: url.to_string(),
        source,
    })
}

fn schema_error(url: &str, violation: schema::Violation) -> ManifestError {
    ManifestError::Schema {
        url: url.to_string(),
        path: violation.path,
        message: violation.message,
    }
}

/// Parse and validate a `ros2.repos` document fetched from `url`.
pub fn parse_ros2_repos(text: &str, url: &str) -> Result<Ros2Repos, ManifestError> {
    let doc = parse_yaml(text, url)?;
    Ros2Repos::from_value(&doc).map_err(|v| schema_error(url, v))
}

/// Parse and validate a rosdistro `distribution.yaml` fetched from `url`.
pub fn parse_rosdistro(text: &str, url: &str) -> Result<RosDistro, ManifestError> {
    let doc = parse_yaml(text, url)?;
    RosDistro::from_value(&doc).map_err(|v| schema_error(url, v))
}
