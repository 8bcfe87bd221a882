//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Validation
//!
//! Values are validated after parsing: base URLs must be absolute URLs and
//! table entries must be non-empty.

use std::collections::BTreeMap;

use reqwest::Url;
use serde::Deserialize;

use super::ConfigError;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// rosdistro_base_url = "https://raw.githubusercontent.com/ros/rosdistro/master"
/// ros2_repos_base_url = "https://raw.githubusercontent.com/ros2/ros2"
/// skip = ["ros2_tracing"]
///
/// [remap]
/// "urdfdom" = "urdfdom_py"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Base URL of the rosdistro registry
    pub rosdistro_base_url: Option<String>,

    /// Base URL of the ros2/ros2 repository
    pub ros2_repos_base_url: Option<String>,

    /// Extra short names to skip
    pub skip: Vec<String>,

    /// Extra short name to rosdistro key mappings
    pub remap: BTreeMap<String, String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("rosdistro_base_url", &self.rosdistro_base_url),
            ("ros2_repos_base_url", &self.ros2_repos_base_url),
        ] {
            if let Some(url) = value {
                Url::parse(url).map_err(|e| {
                    ConfigError::InvalidValue(format!(
                        "{} '{}' is not a valid URL: {}",
                        field, url, e
                    ))
                })?;
            }
        }

        if self.skip.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::InvalidValue(
                "skip entries cannot be empty".to_string(),
            ));
        }

        for (from, to) in &self.remap {
            if from.is_empty() || to.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "remap entry '{}' = '{}' cannot have an empty side",
                    from, to
                )));
            }
        }

        Ok(())
    }
}
