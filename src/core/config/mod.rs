//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Configuration is optional. It can move the two manifest base URLs (for
//! mirrors or local testing) and extend the built-in skip and remap tables.
//!
//! # Precedence
//!
//! 1. Default values and built-in tables
//! 2. Config file (first one found, see below)
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. Explicit `--config <path>` (must exist)
//! 2. `$ROS2_REPOS_COMPARE_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/ros2-repos-compare/config.toml`
//! 4. `~/.ros2-repos-compare/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use ros2_repos_compare::core::config::Config;
//! use ros2_repos_compare::core::distro::Distro;
//!
//! let config = Config::load(None).unwrap();
//! let urls = config.manifest_urls(Distro::Humble, None);
//! println!("rosdistro: {}", urls.rosdistro);
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::distro::Distro;
use super::tables::NameTables;
use super::urls::{ManifestUrls, DEFAULT_ROS2_REPOS_BASE, DEFAULT_ROSDISTRO_BASE};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ROS2_REPOS_COMPARE_CONFIG";

/// Directory name used under the XDG config home and the home directory.
const APP_DIR: &str = "ros2-repos-compare";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Resolved configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Contents of the config file (defaults if none was found)
    pub file: FileConfig,
    /// Path the config was loaded from, if any
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the standard locations are
    /// searched and a missing file means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated, or if an explicit path does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_default(),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Read, parse, and validate a config file.
    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        debug!(path = %path.display(), "loaded config file");
        Ok(Config {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Search the standard locations for a config file.
    fn find_default() -> Option<PathBuf> {
        // 1. Check $ROS2_REPOS_COMPARE_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/ros2-repos-compare/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join(APP_DIR).join("config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.ros2-repos-compare/config.toml
        dirs::home_dir()
            .map(|home| home.join(format!(".{}", APP_DIR)).join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Path the config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Manifest URLs for a distribution, with an optional ros2.repos override.
    pub fn manifest_urls(&self, distro: Distro, ros2_repos_override: Option<&str>) -> ManifestUrls {
        ManifestUrls::derive(
            distro,
            self.file
                .rosdistro_base_url
                .as_deref()
                .unwrap_or(DEFAULT_ROSDISTRO_BASE),
            self.file
                .ros2_repos_base_url
                .as_deref()
                .unwrap_or(DEFAULT_ROS2_REPOS_BASE),
        )
        .with_ros2_repos_override(ros2_repos_override)
    }

    /// Built-in tables extended with the configured entries.
    pub fn name_tables(&self) -> NameTables {
        NameTables::builtin().extend(
            self.file.skip.iter().cloned(),
            self.file
                .remap
                .iter()
                .map(|(from, to)| (from.clone(), to.clone())),
        )
    }
}
