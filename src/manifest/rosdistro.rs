//! manifest::rosdistro
//!
//! The rosdistro `distribution.yaml` registry.
//!
//! Only `repositories.<key>.release.version` is read. Both `release` and
//! `version` may be absent; when present they must have the right type.

use std::collections::HashMap;

use serde_yaml::Value;

use super::schema::{self, FieldPath, Violation};

/// A parsed `distribution.yaml`, reduced to release versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosDistro {
    /// Release version per repository key; `None` when not released
    releases: HashMap<String, Option<String>>,
}

impl RosDistro {
    /// Validate a YAML tree against the rosdistro schema.
    pub fn from_value(doc: &Value) -> Result<Self, Violation> {
        let root = FieldPath::root();
        let top = schema::mapping(doc, &root)?;
        let (repos, repos_path) = schema::required(top, "repositories", &root)?;
        let repos = schema::mapping(repos, &repos_path)?;

        let mut releases = HashMap::with_capacity(repos.len());
        for entry in schema::entries(repos, &repos_path) {
            let (name, value, path) = entry?;
            releases.insert(name, Self::release_version(value, &path)?);
        }

        Ok(Self { releases })
    }

    fn release_version(value: &Value, path: &FieldPath) -> Result<Option<String>, Violation> {
        let record = schema::mapping(value, path)?;
        let Some((release, release_path)) = schema::optional(record, "release", path) else {
            return Ok(None);
        };
        let release = schema::mapping(release, &release_path)?;
        match schema::optional(release, "version", &release_path) {
            Some((version, version_path)) => {
                Ok(Some(schema::string(version, &version_path)?.to_string()))
            }
            None => Ok(None),
        }
    }

    /// Raw release version for a key, revision suffix included.
    pub fn release_version_of(&self, key: &str) -> Option<&str> {
        self.releases.get(key).and_then(|v| v.as_deref())
    }

    /// Whether the registry has an entry for a key, released or not.
    pub fn contains(&self, key: &str) -> bool {
        self.releases.contains_key(key)
    }

    /// Number of repository entries.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<RosDistro, Violation> {
        RosDistro::from_value(&serde_yaml::from_str(text).unwrap())
    }

    const SAMPLE: &str = r#"
release_platforms:
  ubuntu: [jammy]
repositories:
  rclcpp:
    doc:
      type: git
      url: https://github.com/ros2/rclcpp.git
    release:
      tags:
        release: release/humble/{package}/{version}
      version: 16.0.1-1
  acado_vendor:
    source:
      type: git
  fastrtps:
    release:
      url: https://github.com/ros2-gbp/fastrtps-release.git
type: distribution
version: 2
"#;

    #[test]
    fn reads_release_versions() {
        let distro = parse(SAMPLE).unwrap();
        assert_eq!(distro.len(), 3);
        assert_eq!(distro.release_version_of("rclcpp"), Some("16.0.1-1"));
    }

    #[test]
    fn missing_release_or_version_is_none() {
        let distro = parse(SAMPLE).unwrap();
        assert!(distro.contains("acado_vendor"));
        assert_eq!(distro.release_version_of("acado_vendor"), None);
        assert_eq!(distro.release_version_of("fastrtps"), None);
        assert_eq!(distro.release_version_of("missing"), None);
    }

    #[test]
    fn non_string_version_is_violation() {
        let err = parse(
            r#"
repositories:
  rclcpp:
    release:
      version: [1, 2]
"#,
        )
        .unwrap_err();
        assert_eq!(err.path.to_string(), "repositories.rclcpp.release.version");
        assert_eq!(err.message, "expected string, found sequence");
    }

    #[test]
    fn null_release_is_violation() {
        let err = parse(
            r#"
repositories:
  rclcpp:
    release:
"#,
        )
        .unwrap_err();
        assert_eq!(err.path.to_string(), "repositories.rclcpp.release");
        assert_eq!(err.message, "expected mapping, found null");
    }

    #[test]
    fn non_mapping_entry_is_violation() {
        let err = parse("repositories:\n  rclcpp: 3\n").unwrap_err();
        assert_eq!(err.path.to_string(), "repositories.rclcpp");
    }

    #[test]
    fn numeric_key_is_read_as_name() {
        let distro =
            parse("repositories:\n  123:\n    release:\n      version: 1.0.0-1\n").unwrap();
        assert_eq!(distro.release_version_of("123"), Some("1.0.0-1"));
    }
}
