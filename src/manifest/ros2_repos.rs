//! manifest::ros2_repos
//!
//! The `ros2.repos` repository list.
//!
//! ```yaml
//! repositories:
//!   ros2/rclcpp:
//!     type: git
//!     url: https://github.com/ros2/rclcpp.git
//!     version: 16.0.1
//! ```

use reqwest::Url;
use serde_yaml::Value;

use super::schema::{self, FieldPath, Violation};

/// One pinned repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ros2Repo {
    /// Repository path, e.g. `ros2/rclcpp`
    pub path: String,
    /// VCS type, e.g. `git`
    pub vcs: String,
    /// Clone URL
    pub url: String,
    /// Pinned version, tag, or branch
    pub version: String,
}

/// A parsed `ros2.repos` document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ros2Repos {
    pub repositories: Vec<Ros2Repo>,
}

impl Ros2Repos {
    /// Validate a YAML tree against the ros2.repos schema.
    pub fn from_value(doc: &Value) -> Result<Self, Violation> {
        let root = FieldPath::root();
        let top = schema::mapping(doc, &root)?;
        let (repos, repos_path) = schema::required(top, "repositories", &root)?;
        let repos = schema::mapping(repos, &repos_path)?;

        let mut repositories = Vec::with_capacity(repos.len());
        for entry in schema::entries(repos, &repos_path) {
            let (name, value, path) = entry?;
            repositories.push(Self::repo(&name, value, &path)?);
        }

        Ok(Self { repositories })
    }

    fn repo(name: &str, value: &Value, path: &FieldPath) -> Result<Ros2Repo, Violation> {
        let record = schema::mapping(value, path)?;

        let (vcs, vcs_path) = schema::required(record, "type", path)?;
        let (url, url_path) = schema::required(record, "url", path)?;
        let (version, version_path) = schema::required(record, "version", path)?;

        let url = schema::string(url, &url_path)?;
        if let Err(e) = Url::parse(url) {
            return Err(Violation {
                path: url_path,
                message: format!("invalid url '{}': {}", url, e),
            });
        }

        Ok(Ros2Repo {
            path: name.to_string(),
            vcs: schema::string(vcs, &vcs_path)?.to_string(),
            url: url.to_string(),
            version: schema::string(version, &version_path)?.to_string(),
        })
    }
}
